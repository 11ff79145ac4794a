pub mod bar;
pub mod label_format;
pub mod primitives;
pub mod ruler;
pub mod scale;
pub mod text;
pub mod types;

pub use bar::{
    BarGeometry, BarLayout, BarRect, horizontal_center_offset, project_bar, project_bar_rect,
    project_bars,
};
pub use label_format::LabelFormat;
pub use ruler::{RulerLayout, RulerLine, project_ruler, ruler_line_value};
pub use scale::ValueScale;
pub use text::{EstimatedTextMeasurer, LabelBox, TextExtent, TextMeasurer, TextStyle};
pub use types::{DataPoint, Viewport};
