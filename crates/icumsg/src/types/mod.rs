mod arg_name;
mod datetime;
mod message;
mod number;
mod plural;
mod value;

pub use arg_name::ArgName;
pub use datetime::{
    DateTimeFields, DateTimeLength, DateTimeOptions, DateTimePart, DateTimeStyle, HourCycle,
    MonthWidth, NameWidth, NumericWidth,
};
pub use message::{ArgFormat, CompiledMessage, Selector};
pub use number::{NumberOptions, NumberStyle};
pub use plural::PluralCategory;
pub use value::{Rendered, Value};
