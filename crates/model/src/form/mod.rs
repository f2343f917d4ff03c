pub mod row;
pub mod values;
