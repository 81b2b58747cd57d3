pub mod arg_builder;
pub mod toolchain;
