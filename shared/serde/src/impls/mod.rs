mod collections;
mod scalars;
mod string;
