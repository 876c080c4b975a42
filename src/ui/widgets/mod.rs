pub mod header;
pub mod help_bar;
pub mod input_box;
pub mod results_list;
pub mod roster_list;
