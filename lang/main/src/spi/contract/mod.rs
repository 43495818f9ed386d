mod pipe;

pub use pipe::Pipe;
