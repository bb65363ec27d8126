pub mod locus;
