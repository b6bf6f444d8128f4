//! # elfscope-core
//!
//! Safe, dependency-ordered decoding of ELF objects.
//!
//! The decode pipeline classifies the identification prefix, decodes the
//! file header, loads the section table and resolves its names, loads the
//! regular and dynamic symbol tables, and finally decodes every relocation
//! section against the symbol table it links. 32-bit and 64-bit objects in
//! either byte order are supported. No `unsafe` code is permitted.

#![deny(unsafe_code)]

pub mod elf;

pub use elf::{
    ByteSource, DecodeOutcome, DecodeStage, DecodedObject, ElfDecoder, ElfError, ElfResult,
    FileSource, decode,
};
