pub mod html;
pub mod inflection_table;
pub mod utility;
