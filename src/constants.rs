/// Index passed to the first child.
pub const FIRST_CHILD: u32 = 1;
/// Index passed to the last child.
pub const LAST_CHILD: u32 = 10;

pub const ERROR_PREFIX: &str = "Error:";
