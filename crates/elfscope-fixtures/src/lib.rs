//! Synthetic ELF images for tests, benchmarks and fuzz seeds.
//!
//! [`ElfBuilder`] lays out a minimal object: file header, section contents,
//! an automatically appended `.shstrtab`, then the section header table.
//! Encoding is independent of `elfscope-core` so fixtures check the decoder
//! rather than mirror it.

#![forbid(unsafe_code)]

/// Word width of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    W32,
    W64,
}

/// Byte order of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Little,
    Big,
}

pub mod sht {
    pub const NULL: u32 = 0;
    pub const PROGBITS: u32 = 1;
    pub const SYMTAB: u32 = 2;
    pub const STRTAB: u32 = 3;
    pub const RELA: u32 = 4;
    pub const NOBITS: u32 = 8;
    pub const REL: u32 = 9;
    pub const DYNSYM: u32 = 11;
}

pub mod em {
    pub const I386: u16 = 3;
    pub const MIPS: u16 = 8;
    pub const PPC: u16 = 20;
    pub const PPC64: u16 = 21;
    pub const S390: u16 = 22;
    pub const ARM: u16 = 40;
    pub const SPARCV9: u16 = 43;
    pub const X86_64: u16 = 62;
    pub const AARCH64: u16 = 183;
    pub const RISCV: u16 = 243;
}

/// A symbol to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSpec {
    pub name: String,
    pub value: u64,
    pub size: u64,
    pub info: u8,
    pub other: u8,
    pub shndx: u16,
}

impl SymbolSpec {
    /// The mandatory null symbol at index 0.
    pub fn null() -> Self {
        Self {
            name: String::new(),
            value: 0,
            size: 0,
            info: 0,
            other: 0,
            shndx: 0,
        }
    }

    /// A global function defined in section 1.
    pub fn func(name: &str, value: u64) -> Self {
        Self {
            name: name.to_string(),
            value,
            size: 16,
            info: 0x12,
            other: 0,
            shndx: 1,
        }
    }

    /// A global object defined in section 1.
    pub fn object(name: &str, value: u64, size: u64) -> Self {
        Self {
            name: name.to_string(),
            value,
            size,
            info: 0x11,
            other: 0,
            shndx: 1,
        }
    }
}

/// A relocation to encode. `addend` is ignored for REL sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocSpec {
    pub offset: u64,
    pub symbol: u64,
    pub rtype: u32,
    pub addend: i64,
}

impl RelocSpec {
    pub fn new(offset: u64, symbol: u64, rtype: u32, addend: i64) -> Self {
        Self {
            offset,
            symbol,
            rtype,
            addend,
        }
    }
}

#[derive(Debug, Clone)]
struct SectionSpec {
    name: String,
    sh_type: u32,
    flags: u64,
    data: Vec<u8>,
    link: u32,
    info: u32,
    entsize: u64,
    /// Declared size, when it should differ from `data.len()`.
    size_override: Option<u64>,
}

/// Byte-level encoder for one width/order pair.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    pub width: Width,
    pub order: Order,
}

impl Encoder {
    pub fn u16(&self, out: &mut Vec<u8>, v: u16) {
        match self.order {
            Order::Little => out.extend_from_slice(&v.to_le_bytes()),
            Order::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }

    pub fn u32(&self, out: &mut Vec<u8>, v: u32) {
        match self.order {
            Order::Little => out.extend_from_slice(&v.to_le_bytes()),
            Order::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }

    pub fn u64(&self, out: &mut Vec<u8>, v: u64) {
        match self.order {
            Order::Little => out.extend_from_slice(&v.to_le_bytes()),
            Order::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }

    pub fn word(&self, out: &mut Vec<u8>, v: u64) {
        match self.width {
            Width::W32 => self.u32(out, v as u32),
            Width::W64 => self.u64(out, v),
        }
    }

    pub fn header_size(&self) -> u16 {
        match self.width {
            Width::W32 => 52,
            Width::W64 => 64,
        }
    }

    pub fn section_header_size(&self) -> u16 {
        match self.width {
            Width::W32 => 40,
            Width::W64 => 64,
        }
    }

    pub fn symbol_size(&self) -> u64 {
        match self.width {
            Width::W32 => 16,
            Width::W64 => 24,
        }
    }

    pub fn reloc_size(&self, rela: bool) -> u64 {
        match (self.width, rela) {
            (Width::W32, false) => 8,
            (Width::W32, true) => 12,
            (Width::W64, false) => 16,
            (Width::W64, true) => 24,
        }
    }

    /// Pack a symbol index and type into an info word.
    pub fn reloc_info(&self, symbol: u64, rtype: u32) -> u64 {
        match self.width {
            Width::W32 => (symbol << 8) | u64::from(rtype & 0xff),
            Width::W64 => (symbol << 32) | u64::from(rtype),
        }
    }

    pub fn symbol(&self, out: &mut Vec<u8>, name_offset: u32, sym: &SymbolSpec) {
        self.u32(out, name_offset);
        match self.width {
            Width::W32 => {
                self.u32(out, sym.value as u32);
                self.u32(out, sym.size as u32);
                out.push(sym.info);
                out.push(sym.other);
                self.u16(out, sym.shndx);
            }
            Width::W64 => {
                out.push(sym.info);
                out.push(sym.other);
                self.u16(out, sym.shndx);
                self.u64(out, sym.value);
                self.u64(out, sym.size);
            }
        }
    }

    pub fn reloc(&self, out: &mut Vec<u8>, rela: bool, r: &RelocSpec) {
        self.word(out, r.offset);
        self.word(out, self.reloc_info(r.symbol, r.rtype));
        if rela {
            self.word(out, r.addend as u64);
        }
    }
}

/// Pool of NUL-terminated strings, offset 0 is the empty string.
#[derive(Debug, Clone)]
pub struct StringTableBuilder {
    bytes: Vec<u8>,
}

impl Default for StringTableBuilder {
    fn default() -> Self {
        Self { bytes: vec![0] }
    }
}

impl StringTableBuilder {
    /// Append `s` and return its offset. The empty string is offset 0.
    pub fn add(&mut self, s: &str) -> u32 {
        if s.is_empty() {
            return 0;
        }
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        offset
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builder for a minimal section-bearing ELF image.
#[derive(Debug, Clone)]
pub struct ElfBuilder {
    enc: Encoder,
    machine: u16,
    elf_type: u16,
    sections: Vec<SectionSpec>,
    shstrndx_override: Option<u16>,
    shentsize_override: Option<u16>,
    ehsize_override: Option<u16>,
}

impl ElfBuilder {
    pub fn new(width: Width, order: Order, machine: u16) -> Self {
        Self {
            enc: Encoder { width, order },
            machine,
            elf_type: 3,
            sections: Vec::new(),
            shstrndx_override: None,
            shentsize_override: None,
            ehsize_override: None,
        }
    }

    pub fn encoder(&self) -> Encoder {
        self.enc
    }

    /// Set `e_type` (defaults to `ET_DYN`).
    pub fn elf_type(mut self, elf_type: u16) -> Self {
        self.elf_type = elf_type;
        self
    }

    /// Add a section and return its index. Index 0 is the implicit null section.
    pub fn add_section(
        &mut self,
        name: &str,
        sh_type: u32,
        data: Vec<u8>,
        link: u32,
        entsize: u64,
    ) -> usize {
        self.sections.push(SectionSpec {
            name: name.to_string(),
            sh_type,
            flags: 0,
            data,
            link,
            info: 0,
            entsize,
            size_override: None,
        });
        self.sections.len()
    }

    /// Add a string table holding `strings`; returns its index and the offsets.
    pub fn add_strtab(&mut self, name: &str, strings: &[&str]) -> (usize, Vec<u32>) {
        let mut pool = StringTableBuilder::default();
        let offsets = strings.iter().map(|s| pool.add(s)).collect();
        let index = self.add_section(name, sht::STRTAB, pool.into_bytes(), 0, 0);
        (index, offsets)
    }

    /// Add a symbol table and its string table (string table first).
    ///
    /// `symtab_name` of `.dynsym` uses `SHT_DYNSYM`; anything else `SHT_SYMTAB`.
    /// Returns the symbol table's index.
    pub fn add_symbols(
        &mut self,
        symtab_name: &str,
        strtab_name: &str,
        symbols: &[SymbolSpec],
    ) -> usize {
        let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
        let (strtab, offsets) = self.add_strtab(strtab_name, &names);
        let mut data = Vec::new();
        for (sym, offset) in symbols.iter().zip(offsets) {
            self.enc.symbol(&mut data, offset, sym);
        }
        let sh_type = if symtab_name == ".dynsym" {
            sht::DYNSYM
        } else {
            sht::SYMTAB
        };
        let entsize = self.enc.symbol_size();
        self.add_section(symtab_name, sh_type, data, strtab as u32, entsize)
    }

    /// Add a REL or RELA section linked to section `link`.
    pub fn add_relocations(
        &mut self,
        name: &str,
        rela: bool,
        link: usize,
        relocs: &[RelocSpec],
    ) -> usize {
        let mut data = Vec::new();
        for r in relocs {
            self.enc.reloc(&mut data, rela, r);
        }
        let sh_type = if rela { sht::RELA } else { sht::REL };
        let entsize = self.enc.reloc_size(rela);
        self.add_section(name, sh_type, data, link as u32, entsize)
    }

    /// Declare a size for section `index` that differs from its contents.
    pub fn override_size(&mut self, index: usize, size: u64) {
        if let Some(section) = index.checked_sub(1).and_then(|i| self.sections.get_mut(i)) {
            section.size_override = Some(size);
        }
    }

    pub fn set_flags(&mut self, index: usize, flags: u64) {
        if let Some(section) = index.checked_sub(1).and_then(|i| self.sections.get_mut(i)) {
            section.flags = flags;
        }
    }

    pub fn override_shstrndx(mut self, shstrndx: u16) -> Self {
        self.shstrndx_override = Some(shstrndx);
        self
    }

    pub fn override_shentsize(mut self, shentsize: u16) -> Self {
        self.shentsize_override = Some(shentsize);
        self
    }

    pub fn override_ehsize(mut self, ehsize: u16) -> Self {
        self.ehsize_override = Some(ehsize);
        self
    }

    /// Index the appended `.shstrtab` will get.
    pub fn shstrtab_index(&self) -> usize {
        self.sections.len() + 1
    }

    /// Encode the image.
    pub fn build(&self) -> Vec<u8> {
        let enc = self.enc;
        let mut shstrtab = StringTableBuilder::default();
        let mut sections = self.sections.clone();
        let shstrtab_name = shstrtab.add(".shstrtab");
        let name_offsets: Vec<u32> = sections.iter().map(|s| shstrtab.add(&s.name)).collect();
        sections.push(SectionSpec {
            name: ".shstrtab".to_string(),
            sh_type: sht::STRTAB,
            flags: 0,
            data: shstrtab.into_bytes(),
            link: 0,
            info: 0,
            entsize: 0,
            size_override: None,
        });

        // Contents start right after the header, 8-byte aligned.
        let mut body = Vec::new();
        let mut offsets = Vec::with_capacity(sections.len());
        let base = u64::from(enc.header_size());
        for s in &sections {
            while body.len() % 8 != 0 {
                body.push(0);
            }
            offsets.push(base + body.len() as u64);
            body.extend_from_slice(&s.data);
        }
        while body.len() % 8 != 0 {
            body.push(0);
        }
        let shoff = base + body.len() as u64;
        let shnum = (sections.len() + 1) as u16;
        let shstrndx = self.shstrndx_override.unwrap_or(shnum - 1);
        let shentsize = self.shentsize_override.unwrap_or(enc.section_header_size());

        let mut out = Vec::new();
        out.extend_from_slice(b"\x7fELF");
        out.push(match enc.width {
            Width::W32 => 1,
            Width::W64 => 2,
        });
        out.push(match enc.order {
            Order::Little => 1,
            Order::Big => 2,
        });
        out.push(1); // EV_CURRENT
        out.extend_from_slice(&[0; 9]);
        enc.u16(&mut out, self.elf_type);
        enc.u16(&mut out, self.machine);
        enc.u32(&mut out, 1);
        enc.word(&mut out, 0x1000); // e_entry
        enc.word(&mut out, 0); // e_phoff
        enc.word(&mut out, shoff);
        enc.u32(&mut out, 0); // e_flags
        enc.u16(&mut out, self.ehsize_override.unwrap_or(enc.header_size()));
        enc.u16(&mut out, 0); // e_phentsize
        enc.u16(&mut out, 0); // e_phnum
        enc.u16(&mut out, shentsize);
        enc.u16(&mut out, shnum);
        enc.u16(&mut out, shstrndx);
        out.extend_from_slice(&body);

        let null_name = 0u32;
        let pad = usize::from(shentsize).saturating_sub(usize::from(enc.section_header_size()));
        self.section_header(&mut out, null_name, sht::NULL, 0, 0, 0, 0, 0, 0, pad);
        let all_names = name_offsets.iter().copied().chain([shstrtab_name]);
        for ((s, name), offset) in sections.iter().zip(all_names).zip(offsets) {
            let size = s.size_override.unwrap_or(s.data.len() as u64);
            self.section_header(
                &mut out, name, s.sh_type, s.flags, offset, size, s.link, s.info, s.entsize, pad,
            );
        }
        out
    }

    #[allow(clippy::too_many_arguments)]
    fn section_header(
        &self,
        out: &mut Vec<u8>,
        name: u32,
        sh_type: u32,
        flags: u64,
        offset: u64,
        size: u64,
        link: u32,
        info: u32,
        entsize: u64,
        pad: usize,
    ) {
        let enc = self.enc;
        enc.u32(out, name);
        enc.u32(out, sh_type);
        enc.word(out, flags);
        enc.word(out, 0); // sh_addr
        enc.word(out, offset);
        enc.word(out, size);
        enc.u32(out, link);
        enc.u32(out, info);
        enc.word(out, if sh_type == sht::NULL { 0 } else { 8 });
        enc.word(out, entsize);
        out.extend(std::iter::repeat_n(0u8, pad));
    }
}

/// Canned images shared by tests, benchmarks and fuzz seeds.
pub mod scenario {
    use super::*;

    /// Code of the "jump slot" relocation for `machine`, used by canned images.
    pub fn jump_slot_code(machine: u16) -> u32 {
        match machine {
            em::X86_64 => 7,
            em::I386 => 7,
            em::ARM => 22,
            em::AARCH64 => 1026,
            em::PPC | em::PPC64 => 21,
            em::MIPS => 127,
            em::RISCV => 5,
            em::S390 => 11,
            em::SPARCV9 => 21,
            _ => 1,
        }
    }

    /// The dynamic symbols used by [`dynamic_relocs`]: null, `foo`, `bar`.
    pub fn foo_bar_symbols() -> Vec<SymbolSpec> {
        vec![
            SymbolSpec::null(),
            SymbolSpec::func("foo", 0x1000),
            SymbolSpec::func("bar", 0x2000),
        ]
    }

    /// An image with `.dynsym`/`.dynstr` (null, foo, bar) and one relocation
    /// section of two entries (foo, bar) linked to `.dynsym`.
    ///
    /// The relocation section is `.rela.dyn` for RELA and `.rel.dyn` for REL.
    pub fn dynamic_relocs(width: Width, order: Order, machine: u16, rela: bool) -> Vec<u8> {
        let mut b = ElfBuilder::new(width, order, machine);
        let text = b.add_section(".text", sht::PROGBITS, vec![0xc3; 32], 0, 0);
        b.set_flags(text, 0x6);
        let dynsym = b.add_symbols(".dynsym", ".dynstr", &foo_bar_symbols());
        let code = jump_slot_code(machine);
        let name = if rela { ".rela.dyn" } else { ".rel.dyn" };
        b.add_relocations(
            name,
            rela,
            dynsym,
            &[
                RelocSpec::new(0x3000, 1, code, 0),
                RelocSpec::new(0x3008, 2, code, 8),
            ],
        );
        b.build()
    }

    /// A stripped object: `.dynsym` present, no `.symtab`.
    pub fn stripped(width: Width, order: Order, machine: u16) -> Vec<u8> {
        dynamic_relocs(width, order, machine, true)
    }

    /// An unstripped object with both tables and relocations against each.
    pub fn full(width: Width, order: Order, machine: u16) -> Vec<u8> {
        let mut b = ElfBuilder::new(width, order, machine);
        b.add_section(".text", sht::PROGBITS, vec![0x90; 64], 0, 0);
        b.add_section(".bss", sht::NOBITS, Vec::new(), 0, 0);
        let dynsym = b.add_symbols(".dynsym", ".dynstr", &foo_bar_symbols());
        let symtab = b.add_symbols(
            ".symtab",
            ".strtab",
            &[
                SymbolSpec::null(),
                SymbolSpec::func("main", 0x1100),
                SymbolSpec::object("counter", 0x4000, 8),
                SymbolSpec::func("foo", 0x1000),
            ],
        );
        let code = jump_slot_code(machine);
        b.add_relocations(
            ".rela.plt",
            true,
            dynsym,
            &[RelocSpec::new(0x3018, 2, code, 0)],
        );
        b.add_relocations(
            ".rel.text",
            false,
            symtab,
            &[
                RelocSpec::new(0x10, 1, 1, 0),
                RelocSpec::new(0x20, 2, 2, 0),
                RelocSpec::new(0x30, 0, 0, 0),
            ],
        );
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_table_offsets() {
        let mut pool = StringTableBuilder::default();
        assert_eq!(pool.add(""), 0);
        assert_eq!(pool.add("foo"), 1);
        assert_eq!(pool.add("bar"), 5);
        assert_eq!(pool.into_bytes(), b"\0foo\0bar\0");
    }

    #[test]
    fn header_fields_land_where_expected() {
        let image = scenario::dynamic_relocs(Width::W64, Order::Little, em::X86_64, true);
        assert_eq!(&image[..4], b"\x7fELF");
        assert_eq!(image[4], 2);
        assert_eq!(image[5], 1);
        assert_eq!(u16::from_le_bytes([image[18], image[19]]), em::X86_64);
        // null, .text, .dynstr, .dynsym, .rela.dyn, .shstrtab
        assert_eq!(u16::from_le_bytes([image[60], image[61]]), 6);
        assert_eq!(u16::from_le_bytes([image[62], image[63]]), 5);
    }

    #[test]
    fn big_endian_32_bit_header() {
        let image = scenario::dynamic_relocs(Width::W32, Order::Big, em::MIPS, false);
        assert_eq!(image[4], 1);
        assert_eq!(image[5], 2);
        assert_eq!(u16::from_be_bytes([image[18], image[19]]), em::MIPS);
        assert_eq!(u16::from_be_bytes([image[40], image[41]]), 52);
    }

    #[test]
    fn reloc_info_packing() {
        let e32 = Encoder {
            width: Width::W32,
            order: Order::Little,
        };
        assert_eq!(e32.reloc_info(2, 7), 0x207);
        let e64 = Encoder {
            width: Width::W64,
            order: Order::Little,
        };
        assert_eq!(e64.reloc_info(2, 7), 0x2_0000_0007);
    }
}
