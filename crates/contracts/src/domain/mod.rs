pub mod a001_appearance;
