pub mod skeleton;

pub use skeleton::MenuSkeleton;
