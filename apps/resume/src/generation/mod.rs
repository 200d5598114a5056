// Resume assembly: resolves the input document, lays it out, and drives a
// DocumentBuilder through every row before the PDF is written in one go.

pub mod assembler;

pub use assembler::{
    build_document, generate, resolve_document, DocumentSource, FontMode, GenerateOptions,
    GenerationReport,
};
