//! Range minimum query data structures. These data structures allow to calculate the index of the
//! minimum element in a range of a static array in constant time. The implementation is located
//! in the [fischer_heun][fischer_heun] module.

pub mod fischer_heun;
