pub mod descriptor;
pub mod ease;
pub mod interp;
pub mod track;
