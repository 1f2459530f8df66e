pub(crate) mod angle;
pub(crate) mod vector;
