mod month_table;
mod section;

pub use month_table::MonthBlock;
pub use section::Section;
