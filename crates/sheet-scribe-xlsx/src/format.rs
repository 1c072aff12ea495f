//! Conversion of style specs to writer formats

use rust_xlsxwriter::{Color as XlsxColor, Format, FormatPattern};
use sheet_scribe_core::{Color, StyleSpec};

pub(crate) fn to_format(spec: &StyleSpec) -> Format {
    let mut format = Format::new();

    if spec.bold {
        format = format.set_bold();
    }

    if let Some(fill) = spec.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(to_color(fill));
    }

    if let Some(num_format) = &spec.number_format {
        format = format.set_num_format(num_format);
    }

    format
}

fn to_color(color: Color) -> XlsxColor {
    XlsxColor::RGB(color.to_u32())
}
