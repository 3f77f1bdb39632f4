pub mod profile_form;
pub mod results;
