pub mod icons;
pub mod storage;
