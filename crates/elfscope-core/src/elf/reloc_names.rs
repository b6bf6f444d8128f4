//! Relocation-type names keyed by (machine, code).
//!
//! Each covered machine has one table sorted by code. Machines without a
//! table, and codes missing from a table, name as [`RelocTypeName::Unknown`].

use std::fmt;

use serde::{Serialize, Serializer};

use super::header::ElfMachine;

/// Name of a relocation type, or the unknown marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelocTypeName {
    Known(&'static str),
    Unknown,
}

impl RelocTypeName {
    pub const UNKNOWN_LABEL: &'static str = "R_UNKNOWN";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Known(name) => name,
            Self::Unknown => Self::UNKNOWN_LABEL,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for RelocTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelocTypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Resolve `code` against the table for `machine`.
pub fn relocation_type_name(machine: ElfMachine, code: u32) -> RelocTypeName {
    let Some(table) = table_for(machine) else {
        return RelocTypeName::Unknown;
    };
    match table.binary_search_by_key(&code, |&(c, _)| c) {
        Ok(i) => RelocTypeName::Known(table[i].1),
        Err(_) => RelocTypeName::Unknown,
    }
}

/// The name table for `machine`, if one exists.
pub fn table_for(machine: ElfMachine) -> Option<&'static [(u32, &'static str)]> {
    Some(match machine {
        ElfMachine::X86_64 => X86_64,
        ElfMachine::I386 => I386,
        ElfMachine::Arm => ARM,
        ElfMachine::Aarch64 => AARCH64,
        ElfMachine::Ppc => PPC,
        ElfMachine::Ppc64 => PPC64,
        ElfMachine::Mips => MIPS,
        ElfMachine::RiscV => RISCV,
        ElfMachine::S390 => S390,
        ElfMachine::SparcV9 => SPARC,
        ElfMachine::None | ElfMachine::Unknown(_) => return None,
    })
}

/// Every machine that has a name table.
pub const COVERED_MACHINES: [ElfMachine; 10] = [
    ElfMachine::X86_64,
    ElfMachine::I386,
    ElfMachine::Arm,
    ElfMachine::Aarch64,
    ElfMachine::Ppc,
    ElfMachine::Ppc64,
    ElfMachine::Mips,
    ElfMachine::RiscV,
    ElfMachine::S390,
    ElfMachine::SparcV9,
];

/// Check that every table is strictly ordered by code.
///
/// Returns the first machine and code found out of order.
pub fn validate_tables() -> Result<usize, (ElfMachine, u32)> {
    let mut total = 0;
    for machine in COVERED_MACHINES {
        let Some(table) = table_for(machine) else {
            continue;
        };
        if let Some(pair) = table.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err((machine, pair[1].0));
        }
        total += table.len();
    }
    Ok(total)
}

const X86_64: &[(u32, &str)] = &[
    (0, "R_X86_64_NONE"),
    (1, "R_X86_64_64"),
    (2, "R_X86_64_PC32"),
    (3, "R_X86_64_GOT32"),
    (4, "R_X86_64_PLT32"),
    (5, "R_X86_64_COPY"),
    (6, "R_X86_64_GLOB_DAT"),
    (7, "R_X86_64_JMP_SLOT"),
    (8, "R_X86_64_RELATIVE"),
    (9, "R_X86_64_GOTPCREL"),
    (10, "R_X86_64_32"),
    (11, "R_X86_64_32S"),
    (12, "R_X86_64_16"),
    (13, "R_X86_64_PC16"),
    (14, "R_X86_64_8"),
    (15, "R_X86_64_PC8"),
    (16, "R_X86_64_DTPMOD64"),
    (17, "R_X86_64_DTPOFF64"),
    (18, "R_X86_64_TPOFF64"),
    (19, "R_X86_64_TLSGD"),
    (20, "R_X86_64_TLSLD"),
    (21, "R_X86_64_DTPOFF32"),
    (22, "R_X86_64_GOTTPOFF"),
    (23, "R_X86_64_TPOFF32"),
    (24, "R_X86_64_PC64"),
    (25, "R_X86_64_GOTOFF64"),
    (26, "R_X86_64_GOTPC32"),
    (27, "R_X86_64_GOT64"),
    (28, "R_X86_64_GOTPCREL64"),
    (29, "R_X86_64_GOTPC64"),
    (30, "R_X86_64_GOTPLT64"),
    (31, "R_X86_64_PLTOFF64"),
    (32, "R_X86_64_SIZE32"),
    (33, "R_X86_64_SIZE64"),
    (34, "R_X86_64_GOTPC32_TLSDESC"),
    (35, "R_X86_64_TLSDESC_CALL"),
    (36, "R_X86_64_TLSDESC"),
    (37, "R_X86_64_IRELATIVE"),
    (38, "R_X86_64_RELATIVE64"),
    (41, "R_X86_64_GOTPCRELX"),
    (42, "R_X86_64_REX_GOTPCRELX"),
];

const I386: &[(u32, &str)] = &[
    (0, "R_386_NONE"),
    (1, "R_386_32"),
    (2, "R_386_PC32"),
    (3, "R_386_GOT32"),
    (4, "R_386_PLT32"),
    (5, "R_386_COPY"),
    (6, "R_386_GLOB_DAT"),
    (7, "R_386_JMP_SLOT"),
    (8, "R_386_RELATIVE"),
    (9, "R_386_GOTOFF"),
    (10, "R_386_GOTPC"),
    (11, "R_386_32PLT"),
    (14, "R_386_TLS_TPOFF"),
    (15, "R_386_TLS_IE"),
    (16, "R_386_TLS_GOTIE"),
    (17, "R_386_TLS_LE"),
    (18, "R_386_TLS_GD"),
    (19, "R_386_TLS_LDM"),
    (20, "R_386_16"),
    (21, "R_386_PC16"),
    (22, "R_386_8"),
    (23, "R_386_PC8"),
    (24, "R_386_TLS_GD_32"),
    (25, "R_386_TLS_GD_PUSH"),
    (26, "R_386_TLS_GD_CALL"),
    (27, "R_386_TLS_GD_POP"),
    (28, "R_386_TLS_LDM_32"),
    (29, "R_386_TLS_LDM_PUSH"),
    (30, "R_386_TLS_LDM_CALL"),
    (31, "R_386_TLS_LDM_POP"),
    (32, "R_386_TLS_LDO_32"),
    (33, "R_386_TLS_IE_32"),
    (34, "R_386_TLS_LE_32"),
    (35, "R_386_TLS_DTPMOD32"),
    (36, "R_386_TLS_DTPOFF32"),
    (37, "R_386_TLS_TPOFF32"),
    (38, "R_386_SIZE32"),
    (39, "R_386_TLS_GOTDESC"),
    (40, "R_386_TLS_DESC_CALL"),
    (41, "R_386_TLS_DESC"),
    (42, "R_386_IRELATIVE"),
    (43, "R_386_GOT32X"),
];

const ARM: &[(u32, &str)] = &[
    (0, "R_ARM_NONE"),
    (1, "R_ARM_PC24"),
    (2, "R_ARM_ABS32"),
    (3, "R_ARM_REL32"),
    (4, "R_ARM_PC13"),
    (5, "R_ARM_ABS16"),
    (6, "R_ARM_ABS12"),
    (7, "R_ARM_THM_ABS5"),
    (8, "R_ARM_ABS8"),
    (9, "R_ARM_SBREL32"),
    (10, "R_ARM_THM_PC22"),
    (11, "R_ARM_THM_PC8"),
    (12, "R_ARM_AMP_VCALL9"),
    (13, "R_ARM_SWI24"),
    (14, "R_ARM_THM_SWI8"),
    (15, "R_ARM_XPC25"),
    (16, "R_ARM_THM_XPC22"),
    (17, "R_ARM_TLS_DTPMOD32"),
    (18, "R_ARM_TLS_DTPOFF32"),
    (19, "R_ARM_TLS_TPOFF32"),
    (20, "R_ARM_COPY"),
    (21, "R_ARM_GLOB_DAT"),
    (22, "R_ARM_JUMP_SLOT"),
    (23, "R_ARM_RELATIVE"),
    (24, "R_ARM_GOTOFF"),
    (25, "R_ARM_GOTPC"),
    (26, "R_ARM_GOT32"),
    (27, "R_ARM_PLT32"),
    (28, "R_ARM_CALL"),
    (29, "R_ARM_JUMP24"),
    (30, "R_ARM_THM_JUMP24"),
    (31, "R_ARM_BASE_ABS"),
    (32, "R_ARM_ALU_PCREL_7_0"),
    (33, "R_ARM_ALU_PCREL_15_8"),
    (34, "R_ARM_ALU_PCREL_23_15"),
    (35, "R_ARM_LDR_SBREL_11_10_NC"),
    (36, "R_ARM_ALU_SBREL_19_12_NC"),
    (37, "R_ARM_ALU_SBREL_27_20_CK"),
    (38, "R_ARM_TARGET1"),
    (39, "R_ARM_SBREL31"),
    (40, "R_ARM_V4BX"),
    (41, "R_ARM_TARGET2"),
    (42, "R_ARM_PREL31"),
    (43, "R_ARM_MOVW_ABS_NC"),
    (44, "R_ARM_MOVT_ABS"),
    (45, "R_ARM_MOVW_PREL_NC"),
    (46, "R_ARM_MOVT_PREL"),
    (47, "R_ARM_THM_MOVW_ABS_NC"),
    (48, "R_ARM_THM_MOVT_ABS"),
    (49, "R_ARM_THM_MOVW_PREL_NC"),
    (50, "R_ARM_THM_MOVT_PREL"),
    (51, "R_ARM_THM_JUMP19"),
    (52, "R_ARM_THM_JUMP6"),
    (53, "R_ARM_THM_ALU_PREL_11_0"),
    (54, "R_ARM_THM_PC12"),
    (55, "R_ARM_ABS32_NOI"),
    (56, "R_ARM_REL32_NOI"),
    (57, "R_ARM_ALU_PC_G0_NC"),
    (58, "R_ARM_ALU_PC_G0"),
    (59, "R_ARM_ALU_PC_G1_NC"),
    (60, "R_ARM_ALU_PC_G1"),
    (61, "R_ARM_ALU_PC_G2"),
    (62, "R_ARM_LDR_PC_G1"),
    (63, "R_ARM_LDR_PC_G2"),
    (64, "R_ARM_LDRS_PC_G0"),
    (65, "R_ARM_LDRS_PC_G1"),
    (66, "R_ARM_LDRS_PC_G2"),
    (67, "R_ARM_LDC_PC_G0"),
    (68, "R_ARM_LDC_PC_G1"),
    (69, "R_ARM_LDC_PC_G2"),
    (70, "R_ARM_ALU_SB_G0_NC"),
    (71, "R_ARM_ALU_SB_G0"),
    (72, "R_ARM_ALU_SB_G1_NC"),
    (73, "R_ARM_ALU_SB_G1"),
    (74, "R_ARM_ALU_SB_G2"),
    (75, "R_ARM_LDR_SB_G0"),
    (76, "R_ARM_LDR_SB_G1"),
    (77, "R_ARM_LDR_SB_G2"),
    (78, "R_ARM_LDRS_SB_G0"),
    (79, "R_ARM_LDRS_SB_G1"),
    (80, "R_ARM_LDRS_SB_G2"),
    (81, "R_ARM_LDC_SB_G0"),
    (82, "R_ARM_LDC_SB_G1"),
    (83, "R_ARM_LDC_SB_G2"),
    (84, "R_ARM_MOVW_BREL_NC"),
    (85, "R_ARM_MOVT_BREL"),
    (86, "R_ARM_MOVW_BREL"),
    (87, "R_ARM_THM_MOVW_BREL_NC"),
    (88, "R_ARM_THM_MOVT_BREL"),
    (89, "R_ARM_THM_MOVW_BREL"),
    (90, "R_ARM_TLS_GOTDESC"),
    (91, "R_ARM_TLS_CALL"),
    (92, "R_ARM_TLS_DESCSEQ"),
    (93, "R_ARM_THM_TLS_CALL"),
    (94, "R_ARM_PLT32_ABS"),
    (95, "R_ARM_GOT_ABS"),
    (96, "R_ARM_GOT_PREL"),
    (97, "R_ARM_GOT_BREL12"),
    (98, "R_ARM_GOTOFF12"),
    (99, "R_ARM_GOTRELAX"),
    (100, "R_ARM_GNU_VTENTRY"),
    (101, "R_ARM_GNU_VTINHERIT"),
    (102, "R_ARM_THM_JUMP11"),
    (103, "R_ARM_THM_JUMP8"),
    (104, "R_ARM_TLS_GD32"),
    (105, "R_ARM_TLS_LDM32"),
    (106, "R_ARM_TLS_LDO32"),
    (107, "R_ARM_TLS_IE32"),
    (108, "R_ARM_TLS_LE32"),
    (109, "R_ARM_TLS_LDO12"),
    (110, "R_ARM_TLS_LE12"),
    (111, "R_ARM_TLS_IE12GP"),
    (112, "R_ARM_PRIVATE_0"),
    (113, "R_ARM_PRIVATE_1"),
    (114, "R_ARM_PRIVATE_2"),
    (115, "R_ARM_PRIVATE_3"),
    (116, "R_ARM_PRIVATE_4"),
    (117, "R_ARM_PRIVATE_5"),
    (118, "R_ARM_PRIVATE_6"),
    (119, "R_ARM_PRIVATE_7"),
    (120, "R_ARM_PRIVATE_8"),
    (121, "R_ARM_PRIVATE_9"),
    (122, "R_ARM_PRIVATE_10"),
    (123, "R_ARM_PRIVATE_11"),
    (124, "R_ARM_PRIVATE_12"),
    (125, "R_ARM_PRIVATE_13"),
    (126, "R_ARM_PRIVATE_14"),
    (127, "R_ARM_PRIVATE_15"),
    (128, "R_ARM_ME_TOO"),
    (129, "R_ARM_THM_TLS_DESCSEQ16"),
    (130, "R_ARM_THM_TLS_DESCSEQ32"),
    (131, "R_ARM_THM_GOT_BREL12"),
    (140, "R_ARM_THM_ALU_ABS_G0_NC"),
    (141, "R_ARM_THM_ALU_ABS_G1_NC"),
    (142, "R_ARM_THM_ALU_ABS_G2_NC"),
    (143, "R_ARM_THM_ALU_ABS_G3"),
    (160, "R_ARM_IRELATIVE"),
    (249, "R_ARM_RXPC25"),
    (250, "R_ARM_RSBREL32"),
    (251, "R_ARM_THM_RPC22"),
    (252, "R_ARM_RREL32"),
    (253, "R_ARM_RABS32"),
    (254, "R_ARM_RPC24"),
    (255, "R_ARM_RBASE"),
];

const AARCH64: &[(u32, &str)] = &[
    (0, "R_AARCH64_NONE"),
    (257, "R_AARCH64_ABS64"),
    (258, "R_AARCH64_ABS32"),
    (259, "R_AARCH64_ABS16"),
    (260, "R_AARCH64_PREL64"),
    (261, "R_AARCH64_PREL32"),
    (262, "R_AARCH64_PREL16"),
    (263, "R_AARCH64_MOVW_UABS_G0"),
    (264, "R_AARCH64_MOVW_UABS_G0_NC"),
    (265, "R_AARCH64_MOVW_UABS_G1"),
    (266, "R_AARCH64_MOVW_UABS_G1_NC"),
    (267, "R_AARCH64_MOVW_UABS_G2"),
    (268, "R_AARCH64_MOVW_UABS_G2_NC"),
    (269, "R_AARCH64_MOVW_UABS_G3"),
    (270, "R_AARCH64_MOVW_SABS_G0"),
    (271, "R_AARCH64_MOVW_SABS_G1"),
    (272, "R_AARCH64_MOVW_SABS_G2"),
    (273, "R_AARCH64_LD_PREL_LO19"),
    (274, "R_AARCH64_ADR_PREL_LO21"),
    (275, "R_AARCH64_ADR_PREL_PG_HI21"),
    (276, "R_AARCH64_ADR_PREL_PG_HI21_NC"),
    (277, "R_AARCH64_ADD_ABS_LO12_NC"),
    (278, "R_AARCH64_LDST8_ABS_LO12_NC"),
    (279, "R_AARCH64_TSTBR14"),
    (280, "R_AARCH64_CONDBR19"),
    (282, "R_AARCH64_JUMP26"),
    (283, "R_AARCH64_CALL26"),
    (284, "R_AARCH64_LDST16_ABS_LO12_NC"),
    (285, "R_AARCH64_LDST32_ABS_LO12_NC"),
    (286, "R_AARCH64_LDST64_ABS_LO12_NC"),
    (287, "R_AARCH64_MOVW_PREL_G0"),
    (288, "R_AARCH64_MOVW_PREL_G0_NC"),
    (289, "R_AARCH64_MOVW_PREL_G1"),
    (290, "R_AARCH64_MOVW_PREL_G1_NC"),
    (291, "R_AARCH64_MOVW_PREL_G2"),
    (292, "R_AARCH64_MOVW_PREL_G2_NC"),
    (293, "R_AARCH64_MOVW_PREL_G3"),
    (299, "R_AARCH64_LDST128_ABS_LO12_NC"),
    (300, "R_AARCH64_MOVW_GOTOFF_G0"),
    (301, "R_AARCH64_MOVW_GOTOFF_G0_NC"),
    (302, "R_AARCH64_MOVW_GOTOFF_G1"),
    (303, "R_AARCH64_MOVW_GOTOFF_G1_NC"),
    (304, "R_AARCH64_MOVW_GOTOFF_G2"),
    (305, "R_AARCH64_MOVW_GOTOFF_G2_NC"),
    (306, "R_AARCH64_MOVW_GOTOFF_G3"),
    (307, "R_AARCH64_GOTREL64"),
    (308, "R_AARCH64_GOTREL32"),
    (309, "R_AARCH64_GOT_LD_PREL19"),
    (310, "R_AARCH64_LD64_GOTOFF_LO15"),
    (311, "R_AARCH64_ADR_GOT_PAGE"),
    (312, "R_AARCH64_LD64_GOT_LO12_NC"),
    (313, "R_AARCH64_LD64_GOTPAGE_LO15"),
    (512, "R_AARCH64_TLSGD_ADR_PREL21"),
    (513, "R_AARCH64_TLSGD_ADR_PAGE21"),
    (514, "R_AARCH64_TLSGD_ADD_LO12_NC"),
    (515, "R_AARCH64_TLSGD_MOVW_G1"),
    (516, "R_AARCH64_TLSGD_MOVW_G0_NC"),
    (517, "R_AARCH64_TLSLD_ADR_PREL21"),
    (518, "R_AARCH64_TLSLD_ADR_PAGE21"),
    (519, "R_AARCH64_TLSLD_ADD_LO12_NC"),
    (520, "R_AARCH64_TLSLD_MOVW_G1"),
    (521, "R_AARCH64_TLSLD_MOVW_G0_NC"),
    (522, "R_AARCH64_TLSLD_LD_PREL19"),
    (523, "R_AARCH64_TLSLD_MOVW_DTPREL_G2"),
    (524, "R_AARCH64_TLSLD_MOVW_DTPREL_G1"),
    (525, "R_AARCH64_TLSLD_MOVW_DTPREL_G1_NC"),
    (526, "R_AARCH64_TLSLD_MOVW_DTPREL_G0"),
    (527, "R_AARCH64_TLSLD_MOVW_DTPREL_G0_NC"),
    (528, "R_AARCH64_TLSLD_ADD_DTPREL_HI12"),
    (529, "R_AARCH64_TLSLD_ADD_DTPREL_LO12"),
    (530, "R_AARCH64_TLSLD_ADD_DTPREL_LO12_NC"),
    (531, "R_AARCH64_TLSLD_LDST8_DTPREL_LO12"),
    (532, "R_AARCH64_TLSLD_LDST8_DTPREL_LO12_NC"),
    (533, "R_AARCH64_TLSLD_LDST16_DTPREL_LO12"),
    (534, "R_AARCH64_TLSLD_LDST16_DTPREL_LO12_NC"),
    (535, "R_AARCH64_TLSLD_LDST32_DTPREL_LO12"),
    (536, "R_AARCH64_TLSLD_LDST32_DTPREL_LO12_NC"),
    (537, "R_AARCH64_TLSLD_LDST64_DTPREL_LO12"),
    (538, "R_AARCH64_TLSLD_LDST64_DTPREL_LO12_NC"),
    (539, "R_AARCH64_TLSIE_MOVW_GOTTPREL_G1"),
    (540, "R_AARCH64_TLSIE_MOVW_GOTTPREL_G0_NC"),
    (541, "R_AARCH64_TLSIE_ADR_GOTTPREL_PAGE21"),
    (542, "R_AARCH64_TLSIE_LD64_GOTTPREL_LO12_NC"),
    (543, "R_AARCH64_TLSIE_LD_GOTTPREL_PREL19"),
    (544, "R_AARCH64_TLSLE_MOVW_TPREL_G2"),
    (545, "R_AARCH64_TLSLE_MOVW_TPREL_G1"),
    (546, "R_AARCH64_TLSLE_MOVW_TPREL_G1_NC"),
    (547, "R_AARCH64_TLSLE_MOVW_TPREL_G0"),
    (548, "R_AARCH64_TLSLE_MOVW_TPREL_G0_NC"),
    (549, "R_AARCH64_TLSLE_ADD_TPREL_HI12"),
    (550, "R_AARCH64_TLSLE_ADD_TPREL_LO12"),
    (551, "R_AARCH64_TLSLE_ADD_TPREL_LO12_NC"),
    (552, "R_AARCH64_TLSLE_LDST8_TPREL_LO12"),
    (553, "R_AARCH64_TLSLE_LDST8_TPREL_LO12_NC"),
    (554, "R_AARCH64_TLSLE_LDST16_TPREL_LO12"),
    (555, "R_AARCH64_TLSLE_LDST16_TPREL_LO12_NC"),
    (556, "R_AARCH64_TLSLE_LDST32_TPREL_LO12"),
    (557, "R_AARCH64_TLSLE_LDST32_TPREL_LO12_NC"),
    (558, "R_AARCH64_TLSLE_LDST64_TPREL_LO12"),
    (559, "R_AARCH64_TLSLE_LDST64_TPREL_LO12_NC"),
    (560, "R_AARCH64_TLSDESC_LD_PREL19"),
    (561, "R_AARCH64_TLSDESC_ADR_PREL21"),
    (562, "R_AARCH64_TLSDESC_ADR_PAGE21"),
    (563, "R_AARCH64_TLSDESC_LD64_LO12_NC"),
    (564, "R_AARCH64_TLSDESC_ADD_LO12_NC"),
    (565, "R_AARCH64_TLSDESC_OFF_G1"),
    (566, "R_AARCH64_TLSDESC_OFF_G0_NC"),
    (567, "R_AARCH64_TLSDESC_LDR"),
    (568, "R_AARCH64_TLSDESC_ADD"),
    (569, "R_AARCH64_TLSDESC_CALL"),
    (570, "R_AARCH64_TLSLE_LDST128_TPREL_LO12"),
    (571, "R_AARCH64_TLSLE_LDST128_TPREL_LO12_NC"),
    (572, "R_AARCH64_TLSLD_LDST128_DTPREL_LO12"),
    (573, "R_AARCH64_TLSLD_LDST128_DTPREL_LO12_NC"),
    (1024, "R_AARCH64_COPY"),
    (1025, "R_AARCH64_GLOB_DAT"),
    (1026, "R_AARCH64_JUMP_SLOT"),
    (1027, "R_AARCH64_RELATIVE"),
    (1028, "R_AARCH64_TLS_DTPMOD64"),
    (1029, "R_AARCH64_TLS_DTPREL64"),
    (1030, "R_AARCH64_TLS_TPREL64"),
    (1031, "R_AARCH64_TLSDESC"),
    (1032, "R_AARCH64_IRELATIVE"),
];

const PPC: &[(u32, &str)] = &[
    (0, "R_PPC_NONE"),
    (1, "R_PPC_ADDR32"),
    (2, "R_PPC_ADDR24"),
    (3, "R_PPC_ADDR16"),
    (4, "R_PPC_ADDR16_LO"),
    (5, "R_PPC_ADDR16_HI"),
    (6, "R_PPC_ADDR16_HA"),
    (7, "R_PPC_ADDR14"),
    (8, "R_PPC_ADDR14_BRTAKEN"),
    (9, "R_PPC_ADDR14_BRNTAKEN"),
    (10, "R_PPC_REL24"),
    (11, "R_PPC_REL14"),
    (12, "R_PPC_REL14_BRTAKEN"),
    (13, "R_PPC_REL14_BRNTAKEN"),
    (14, "R_PPC_GOT16"),
    (15, "R_PPC_GOT16_LO"),
    (16, "R_PPC_GOT16_HI"),
    (17, "R_PPC_GOT16_HA"),
    (18, "R_PPC_PLTREL24"),
    (19, "R_PPC_COPY"),
    (20, "R_PPC_GLOB_DAT"),
    (21, "R_PPC_JMP_SLOT"),
    (22, "R_PPC_RELATIVE"),
    (23, "R_PPC_LOCAL24PC"),
    (24, "R_PPC_UADDR32"),
    (25, "R_PPC_UADDR16"),
    (26, "R_PPC_REL32"),
    (27, "R_PPC_PLT32"),
    (28, "R_PPC_PLTREL32"),
    (29, "R_PPC_PLT16_LO"),
    (30, "R_PPC_PLT16_HI"),
    (31, "R_PPC_PLT16_HA"),
    (32, "R_PPC_SDAREL16"),
    (33, "R_PPC_SECTOFF"),
    (34, "R_PPC_SECTOFF_LO"),
    (35, "R_PPC_SECTOFF_HI"),
    (36, "R_PPC_SECTOFF_HA"),
    (67, "R_PPC_TLS"),
    (68, "R_PPC_DTPMOD32"),
    (69, "R_PPC_TPREL16"),
    (70, "R_PPC_TPREL16_LO"),
    (71, "R_PPC_TPREL16_HI"),
    (72, "R_PPC_TPREL16_HA"),
    (73, "R_PPC_TPREL32"),
    (74, "R_PPC_DTPREL16"),
    (75, "R_PPC_DTPREL16_LO"),
    (76, "R_PPC_DTPREL16_HI"),
    (77, "R_PPC_DTPREL16_HA"),
    (78, "R_PPC_DTPREL32"),
    (79, "R_PPC_GOT_TLSGD16"),
    (80, "R_PPC_GOT_TLSGD16_LO"),
    (81, "R_PPC_GOT_TLSGD16_HI"),
    (82, "R_PPC_GOT_TLSGD16_HA"),
    (83, "R_PPC_GOT_TLSLD16"),
    (84, "R_PPC_GOT_TLSLD16_LO"),
    (85, "R_PPC_GOT_TLSLD16_HI"),
    (86, "R_PPC_GOT_TLSLD16_HA"),
    (87, "R_PPC_GOT_TPREL16"),
    (88, "R_PPC_GOT_TPREL16_LO"),
    (89, "R_PPC_GOT_TPREL16_HI"),
    (90, "R_PPC_GOT_TPREL16_HA"),
    (91, "R_PPC_GOT_DTPREL16"),
    (92, "R_PPC_GOT_DTPREL16_LO"),
    (93, "R_PPC_GOT_DTPREL16_HI"),
    (94, "R_PPC_GOT_DTPREL16_HA"),
    (95, "R_PPC_TLSGD"),
    (96, "R_PPC_TLSLD"),
    (101, "R_PPC_EMB_NADDR32"),
    (102, "R_PPC_EMB_NADDR16"),
    (103, "R_PPC_EMB_NADDR16_LO"),
    (104, "R_PPC_EMB_NADDR16_HI"),
    (105, "R_PPC_EMB_NADDR16_HA"),
    (106, "R_PPC_EMB_SDAI16"),
    (107, "R_PPC_EMB_SDA2I16"),
    (108, "R_PPC_EMB_SDA2REL"),
    (109, "R_PPC_EMB_SDA21"),
    (110, "R_PPC_EMB_MRKREF"),
    (111, "R_PPC_EMB_RELSEC16"),
    (112, "R_PPC_EMB_RELST_LO"),
    (113, "R_PPC_EMB_RELST_HI"),
    (114, "R_PPC_EMB_RELST_HA"),
    (115, "R_PPC_EMB_BIT_FLD"),
    (116, "R_PPC_EMB_RELSDA"),
    (248, "R_PPC_IRELATIVE"),
    (249, "R_PPC_REL16"),
    (250, "R_PPC_REL16_LO"),
    (251, "R_PPC_REL16_HI"),
    (252, "R_PPC_REL16_HA"),
];

const PPC64: &[(u32, &str)] = &[
    (0, "R_PPC64_NONE"),
    (1, "R_PPC64_ADDR32"),
    (2, "R_PPC64_ADDR24"),
    (3, "R_PPC64_ADDR16"),
    (4, "R_PPC64_ADDR16_LO"),
    (5, "R_PPC64_ADDR16_HI"),
    (6, "R_PPC64_ADDR16_HA"),
    (7, "R_PPC64_ADDR14"),
    (8, "R_PPC64_ADDR14_BRTAKEN"),
    (9, "R_PPC64_ADDR14_BRNTAKEN"),
    (10, "R_PPC64_REL24"),
    (11, "R_PPC64_REL14"),
    (12, "R_PPC64_REL14_BRTAKEN"),
    (13, "R_PPC64_REL14_BRNTAKEN"),
    (14, "R_PPC64_GOT16"),
    (15, "R_PPC64_GOT16_LO"),
    (16, "R_PPC64_GOT16_HI"),
    (17, "R_PPC64_GOT16_HA"),
    (19, "R_PPC64_COPY"),
    (20, "R_PPC64_GLOB_DAT"),
    (21, "R_PPC64_JMP_SLOT"),
    (22, "R_PPC64_RELATIVE"),
    (24, "R_PPC64_UADDR32"),
    (25, "R_PPC64_UADDR16"),
    (26, "R_PPC64_REL32"),
    (27, "R_PPC64_PLT32"),
    (28, "R_PPC64_PLTREL32"),
    (29, "R_PPC64_PLT16_LO"),
    (30, "R_PPC64_PLT16_HI"),
    (31, "R_PPC64_PLT16_HA"),
    (33, "R_PPC64_SECTOFF"),
    (34, "R_PPC64_SECTOFF_LO"),
    (35, "R_PPC64_SECTOFF_HI"),
    (36, "R_PPC64_SECTOFF_HA"),
    (37, "R_PPC64_ADDR30"),
    (38, "R_PPC64_ADDR64"),
    (39, "R_PPC64_ADDR16_HIGHER"),
    (40, "R_PPC64_ADDR16_HIGHERA"),
    (41, "R_PPC64_ADDR16_HIGHEST"),
    (42, "R_PPC64_ADDR16_HIGHESTA"),
    (43, "R_PPC64_UADDR64"),
    (44, "R_PPC64_REL64"),
    (45, "R_PPC64_PLT64"),
    (46, "R_PPC64_PLTREL64"),
    (47, "R_PPC64_TOC16"),
    (48, "R_PPC64_TOC16_LO"),
    (49, "R_PPC64_TOC16_HI"),
    (50, "R_PPC64_TOC16_HA"),
    (51, "R_PPC64_TOC"),
    (52, "R_PPC64_PLTGOT16"),
    (53, "R_PPC64_PLTGOT16_LO"),
    (54, "R_PPC64_PLTGOT16_HI"),
    (55, "R_PPC64_PLTGOT16_HA"),
    (56, "R_PPC64_ADDR16_DS"),
    (57, "R_PPC64_ADDR16_LO_DS"),
    (58, "R_PPC64_GOT16_DS"),
    (59, "R_PPC64_GOT16_LO_DS"),
    (60, "R_PPC64_PLT16_LO_DS"),
    (61, "R_PPC64_SECTOFF_DS"),
    (62, "R_PPC64_SECTOFF_LO_DS"),
    (63, "R_PPC64_TOC16_DS"),
    (64, "R_PPC64_TOC16_LO_DS"),
    (65, "R_PPC64_PLTGOT16_DS"),
    (66, "R_PPC64_PLTGOT16_LO_DS"),
    (67, "R_PPC64_TLS"),
    (68, "R_PPC64_DTPMOD64"),
    (69, "R_PPC64_TPREL16"),
    (70, "R_PPC64_TPREL16_LO"),
    (71, "R_PPC64_TPREL16_HI"),
    (72, "R_PPC64_TPREL16_HA"),
    (73, "R_PPC64_TPREL64"),
    (74, "R_PPC64_DTPREL16"),
    (75, "R_PPC64_DTPREL16_LO"),
    (76, "R_PPC64_DTPREL16_HI"),
    (77, "R_PPC64_DTPREL16_HA"),
    (78, "R_PPC64_DTPREL64"),
    (79, "R_PPC64_GOT_TLSGD16"),
    (80, "R_PPC64_GOT_TLSGD16_LO"),
    (81, "R_PPC64_GOT_TLSGD16_HI"),
    (82, "R_PPC64_GOT_TLSGD16_HA"),
    (83, "R_PPC64_GOT_TLSLD16"),
    (84, "R_PPC64_GOT_TLSLD16_LO"),
    (85, "R_PPC64_GOT_TLSLD16_HI"),
    (86, "R_PPC64_GOT_TLSLD16_HA"),
    (87, "R_PPC64_GOT_TPREL16_DS"),
    (88, "R_PPC64_GOT_TPREL16_LO_DS"),
    (89, "R_PPC64_GOT_TPREL16_HI"),
    (90, "R_PPC64_GOT_TPREL16_HA"),
    (91, "R_PPC64_GOT_DTPREL16_DS"),
    (92, "R_PPC64_GOT_DTPREL16_LO_DS"),
    (93, "R_PPC64_GOT_DTPREL16_HI"),
    (94, "R_PPC64_GOT_DTPREL16_HA"),
    (95, "R_PPC64_TPREL16_DS"),
    (96, "R_PPC64_TPREL16_LO_DS"),
    (97, "R_PPC64_TPREL16_HIGHER"),
    (98, "R_PPC64_TPREL16_HIGHERA"),
    (99, "R_PPC64_TPREL16_HIGHEST"),
    (100, "R_PPC64_TPREL16_HIGHESTA"),
    (101, "R_PPC64_DTPREL16_DS"),
    (102, "R_PPC64_DTPREL16_LO_DS"),
    (103, "R_PPC64_DTPREL16_HIGHER"),
    (104, "R_PPC64_DTPREL16_HIGHERA"),
    (105, "R_PPC64_DTPREL16_HIGHEST"),
    (106, "R_PPC64_DTPREL16_HIGHESTA"),
    (107, "R_PPC64_TLSGD"),
    (108, "R_PPC64_TLSLD"),
    (109, "R_PPC64_TOCSAVE"),
    (110, "R_PPC64_ADDR16_HIGH"),
    (111, "R_PPC64_ADDR16_HIGHA"),
    (112, "R_PPC64_TPREL16_HIGH"),
    (113, "R_PPC64_TPREL16_HIGHA"),
    (114, "R_PPC64_DTPREL16_HIGH"),
    (115, "R_PPC64_DTPREL16_HIGHA"),
    (116, "R_PPC64_REL24_NOTOC"),
    (117, "R_PPC64_ADDR64_LOCAL"),
    (118, "R_PPC64_ENTRY"),
    (247, "R_PPC64_JMP_IREL"),
    (248, "R_PPC64_IRELATIVE"),
    (249, "R_PPC64_REL16"),
    (250, "R_PPC64_REL16_LO"),
    (251, "R_PPC64_REL16_HI"),
    (252, "R_PPC64_REL16_HA"),
];

const MIPS: &[(u32, &str)] = &[
    (0, "R_MIPS_NONE"),
    (1, "R_MIPS_16"),
    (2, "R_MIPS_32"),
    (3, "R_MIPS_REL32"),
    (4, "R_MIPS_26"),
    (5, "R_MIPS_HI16"),
    (6, "R_MIPS_LO16"),
    (7, "R_MIPS_GPREL16"),
    (8, "R_MIPS_LITERAL"),
    (9, "R_MIPS_GOT16"),
    (10, "R_MIPS_PC16"),
    (11, "R_MIPS_CALL16"),
    (12, "R_MIPS_GPREL32"),
    (16, "R_MIPS_SHIFT5"),
    (17, "R_MIPS_SHIFT6"),
    (18, "R_MIPS_64"),
    (19, "R_MIPS_GOT_DISP"),
    (20, "R_MIPS_GOT_PAGE"),
    (21, "R_MIPS_GOT_OFST"),
    (22, "R_MIPS_GOT_HI16"),
    (23, "R_MIPS_GOT_LO16"),
    (24, "R_MIPS_SUB"),
    (25, "R_MIPS_INSERT_A"),
    (26, "R_MIPS_INSERT_B"),
    (27, "R_MIPS_DELETE"),
    (28, "R_MIPS_HIGHER"),
    (29, "R_MIPS_HIGHEST"),
    (30, "R_MIPS_CALL_HI16"),
    (31, "R_MIPS_CALL_LO16"),
    (32, "R_MIPS_SCN_DISP"),
    (33, "R_MIPS_REL16"),
    (34, "R_MIPS_ADD_IMMEDIATE"),
    (35, "R_MIPS_PJUMP"),
    (36, "R_MIPS_RELGOT"),
    (37, "R_MIPS_JALR"),
    (38, "R_MIPS_TLS_DTPMOD32"),
    (39, "R_MIPS_TLS_DTPREL32"),
    (40, "R_MIPS_TLS_DTPMOD64"),
    (41, "R_MIPS_TLS_DTPREL64"),
    (42, "R_MIPS_TLS_GD"),
    (43, "R_MIPS_TLS_LDM"),
    (44, "R_MIPS_TLS_DTPREL_HI16"),
    (45, "R_MIPS_TLS_DTPREL_LO16"),
    (46, "R_MIPS_TLS_GOTTPREL"),
    (47, "R_MIPS_TLS_TPREL32"),
    (48, "R_MIPS_TLS_TPREL64"),
    (49, "R_MIPS_TLS_TPREL_HI16"),
    (50, "R_MIPS_TLS_TPREL_LO16"),
    (51, "R_MIPS_GLOB_DAT"),
    (126, "R_MIPS_COPY"),
    (127, "R_MIPS_JUMP_SLOT"),
];

const RISCV: &[(u32, &str)] = &[
    (0, "R_RISCV_NONE"),
    (1, "R_RISCV_32"),
    (2, "R_RISCV_64"),
    (3, "R_RISCV_RELATIVE"),
    (4, "R_RISCV_COPY"),
    (5, "R_RISCV_JUMP_SLOT"),
    (6, "R_RISCV_TLS_DTPMOD32"),
    (7, "R_RISCV_TLS_DTPMOD64"),
    (8, "R_RISCV_TLS_DTPREL32"),
    (9, "R_RISCV_TLS_DTPREL64"),
    (10, "R_RISCV_TLS_TPREL32"),
    (11, "R_RISCV_TLS_TPREL64"),
    (16, "R_RISCV_BRANCH"),
    (17, "R_RISCV_JAL"),
    (18, "R_RISCV_CALL"),
    (19, "R_RISCV_CALL_PLT"),
    (20, "R_RISCV_GOT_HI20"),
    (21, "R_RISCV_TLS_GOT_HI20"),
    (22, "R_RISCV_TLS_GD_HI20"),
    (23, "R_RISCV_PCREL_HI20"),
    (24, "R_RISCV_PCREL_LO12_I"),
    (25, "R_RISCV_PCREL_LO12_S"),
    (26, "R_RISCV_HI20"),
    (27, "R_RISCV_LO12_I"),
    (28, "R_RISCV_LO12_S"),
    (29, "R_RISCV_TPREL_HI20"),
    (30, "R_RISCV_TPREL_LO12_I"),
    (31, "R_RISCV_TPREL_LO12_S"),
    (32, "R_RISCV_TPREL_ADD"),
    (33, "R_RISCV_ADD8"),
    (34, "R_RISCV_ADD16"),
    (35, "R_RISCV_ADD32"),
    (36, "R_RISCV_ADD64"),
    (37, "R_RISCV_SUB8"),
    (38, "R_RISCV_SUB16"),
    (39, "R_RISCV_SUB32"),
    (40, "R_RISCV_SUB64"),
    (41, "R_RISCV_GNU_VTINHERIT"),
    (42, "R_RISCV_GNU_VTENTRY"),
    (43, "R_RISCV_ALIGN"),
    (44, "R_RISCV_RVC_BRANCH"),
    (45, "R_RISCV_RVC_JUMP"),
    (46, "R_RISCV_RVC_LUI"),
    (47, "R_RISCV_GPREL_I"),
    (48, "R_RISCV_GPREL_S"),
    (49, "R_RISCV_TPREL_I"),
    (50, "R_RISCV_TPREL_S"),
    (51, "R_RISCV_RELAX"),
    (52, "R_RISCV_SUB6"),
    (53, "R_RISCV_SET6"),
    (54, "R_RISCV_SET8"),
    (55, "R_RISCV_SET16"),
    (56, "R_RISCV_SET32"),
    (57, "R_RISCV_32_PCREL"),
    (58, "R_RISCV_IRELATIVE"),
];

const S390: &[(u32, &str)] = &[
    (0, "R_390_NONE"),
    (1, "R_390_8"),
    (2, "R_390_12"),
    (3, "R_390_16"),
    (4, "R_390_32"),
    (5, "R_390_PC32"),
    (6, "R_390_GOT12"),
    (7, "R_390_GOT32"),
    (8, "R_390_PLT32"),
    (9, "R_390_COPY"),
    (10, "R_390_GLOB_DAT"),
    (11, "R_390_JMP_SLOT"),
    (12, "R_390_RELATIVE"),
    (13, "R_390_GOTOFF"),
    (14, "R_390_GOTPC"),
    (15, "R_390_GOT16"),
    (16, "R_390_PC16"),
    (17, "R_390_PC16DBL"),
    (18, "R_390_PLT16DBL"),
    (19, "R_390_PC32DBL"),
    (20, "R_390_PLT32DBL"),
    (21, "R_390_GOTPCDBL"),
    (22, "R_390_64"),
    (23, "R_390_PC64"),
    (24, "R_390_GOT64"),
    (25, "R_390_PLT64"),
    (26, "R_390_GOTENT"),
    (27, "R_390_GOTOFF16"),
    (28, "R_390_GOTOFF64"),
    (29, "R_390_GOTPLT12"),
    (30, "R_390_GOTPLT16"),
    (31, "R_390_GOTPLT32"),
    (32, "R_390_GOTPLT64"),
    (33, "R_390_GOTPLTENT"),
    (34, "R_390_GOTPLTOFF16"),
    (35, "R_390_GOTPLTOFF32"),
    (36, "R_390_GOTPLTOFF64"),
    (37, "R_390_TLS_LOAD"),
    (38, "R_390_TLS_GDCALL"),
    (39, "R_390_TLS_LDCALL"),
    (40, "R_390_TLS_GD32"),
    (41, "R_390_TLS_GD64"),
    (42, "R_390_TLS_GOTIE12"),
    (43, "R_390_TLS_GOTIE32"),
    (44, "R_390_TLS_GOTIE64"),
    (45, "R_390_TLS_LDM32"),
    (46, "R_390_TLS_LDM64"),
    (47, "R_390_TLS_IE32"),
    (48, "R_390_TLS_IE64"),
    (49, "R_390_TLS_IEENT"),
    (50, "R_390_TLS_LE32"),
    (51, "R_390_TLS_LE64"),
    (52, "R_390_TLS_LDO32"),
    (53, "R_390_TLS_LDO64"),
    (54, "R_390_TLS_DTPMOD"),
    (55, "R_390_TLS_DTPOFF"),
    (56, "R_390_TLS_TPOFF"),
    (57, "R_390_20"),
    (58, "R_390_GOT20"),
    (59, "R_390_GOTPLT20"),
    (60, "R_390_TLS_GOTIE20"),
    (61, "R_390_IRELATIVE"),
];

const SPARC: &[(u32, &str)] = &[
    (0, "R_SPARC_NONE"),
    (1, "R_SPARC_8"),
    (2, "R_SPARC_16"),
    (3, "R_SPARC_32"),
    (4, "R_SPARC_DISP8"),
    (5, "R_SPARC_DISP16"),
    (6, "R_SPARC_DISP32"),
    (7, "R_SPARC_WDISP30"),
    (8, "R_SPARC_WDISP22"),
    (9, "R_SPARC_HI22"),
    (10, "R_SPARC_22"),
    (11, "R_SPARC_13"),
    (12, "R_SPARC_LO10"),
    (13, "R_SPARC_GOT10"),
    (14, "R_SPARC_GOT13"),
    (15, "R_SPARC_GOT22"),
    (16, "R_SPARC_PC10"),
    (17, "R_SPARC_PC22"),
    (18, "R_SPARC_WPLT30"),
    (19, "R_SPARC_COPY"),
    (20, "R_SPARC_GLOB_DAT"),
    (21, "R_SPARC_JMP_SLOT"),
    (22, "R_SPARC_RELATIVE"),
    (23, "R_SPARC_UA32"),
    (24, "R_SPARC_PLT32"),
    (25, "R_SPARC_HIPLT22"),
    (26, "R_SPARC_LOPLT10"),
    (27, "R_SPARC_PCPLT32"),
    (28, "R_SPARC_PCPLT22"),
    (29, "R_SPARC_PCPLT10"),
    (30, "R_SPARC_10"),
    (31, "R_SPARC_11"),
    (32, "R_SPARC_64"),
    (33, "R_SPARC_OLO10"),
    (34, "R_SPARC_HH22"),
    (35, "R_SPARC_HM10"),
    (36, "R_SPARC_LM22"),
    (37, "R_SPARC_PC_HH22"),
    (38, "R_SPARC_PC_HM10"),
    (39, "R_SPARC_PC_LM22"),
    (40, "R_SPARC_WDISP16"),
    (41, "R_SPARC_WDISP19"),
    (42, "R_SPARC_GLOB_JMP"),
    (43, "R_SPARC_7"),
    (44, "R_SPARC_5"),
    (45, "R_SPARC_6"),
    (46, "R_SPARC_DISP64"),
    (47, "R_SPARC_PLT64"),
    (48, "R_SPARC_HIX22"),
    (49, "R_SPARC_LOX10"),
    (50, "R_SPARC_H44"),
    (51, "R_SPARC_M44"),
    (52, "R_SPARC_L44"),
    (53, "R_SPARC_REGISTER"),
    (54, "R_SPARC_UA64"),
    (55, "R_SPARC_UA16"),
    (56, "R_SPARC_TLS_GD_HI22"),
    (57, "R_SPARC_TLS_GD_LO10"),
    (58, "R_SPARC_TLS_GD_ADD"),
    (59, "R_SPARC_TLS_GD_CALL"),
    (60, "R_SPARC_TLS_LDM_HI22"),
    (61, "R_SPARC_TLS_LDM_LO10"),
    (62, "R_SPARC_TLS_LDM_ADD"),
    (63, "R_SPARC_TLS_LDM_CALL"),
    (64, "R_SPARC_TLS_LDO_HIX22"),
    (65, "R_SPARC_TLS_LDO_LOX10"),
    (66, "R_SPARC_TLS_LDO_ADD"),
    (67, "R_SPARC_TLS_IE_HI22"),
    (68, "R_SPARC_TLS_IE_LO10"),
    (69, "R_SPARC_TLS_IE_LD"),
    (70, "R_SPARC_TLS_IE_LDX"),
    (71, "R_SPARC_TLS_IE_ADD"),
    (72, "R_SPARC_TLS_LE_HIX22"),
    (73, "R_SPARC_TLS_LE_LOX10"),
    (74, "R_SPARC_TLS_DTPMOD32"),
    (75, "R_SPARC_TLS_DTPMOD64"),
    (76, "R_SPARC_TLS_DTPOFF32"),
    (77, "R_SPARC_TLS_DTPOFF64"),
    (78, "R_SPARC_TLS_TPOFF32"),
    (79, "R_SPARC_TLS_TPOFF64"),
    (80, "R_SPARC_GOTDATA_HIX22"),
    (81, "R_SPARC_GOTDATA_LOX10"),
    (82, "R_SPARC_GOTDATA_OP_HIX22"),
    (83, "R_SPARC_GOTDATA_OP_LOX10"),
    (84, "R_SPARC_GOTDATA_OP"),
    (85, "R_SPARC_H34"),
    (86, "R_SPARC_SIZE32"),
    (87, "R_SPARC_SIZE64"),
    (88, "R_SPARC_WDISP10"),
    (248, "R_SPARC_JMP_IREL"),
    (249, "R_SPARC_IRELATIVE"),
    (250, "R_SPARC_GNU_VTINHERIT"),
    (251, "R_SPARC_GNU_VTENTRY"),
    (252, "R_SPARC_REV32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_strictly_ordered() {
        let total = validate_tables().unwrap();
        assert!(total > 500);
    }

    #[test]
    fn known_codes_resolve() {
        assert_eq!(
            relocation_type_name(ElfMachine::X86_64, 7).as_str(),
            "R_X86_64_JMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::I386, 8).as_str(),
            "R_386_RELATIVE"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::Aarch64, 1026).as_str(),
            "R_AARCH64_JUMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::Arm, 22).as_str(),
            "R_ARM_JUMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::Ppc, 21).as_str(),
            "R_PPC_JMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::Ppc64, 38).as_str(),
            "R_PPC64_ADDR64"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::Mips, 127).as_str(),
            "R_MIPS_JUMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::RiscV, 5).as_str(),
            "R_RISCV_JUMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::S390, 11).as_str(),
            "R_390_JMP_SLOT"
        );
        assert_eq!(
            relocation_type_name(ElfMachine::SparcV9, 21).as_str(),
            "R_SPARC_JMP_SLOT"
        );
    }

    #[test]
    fn unknown_codes_and_machines_use_marker() {
        let name = relocation_type_name(ElfMachine::X86_64, 39);
        assert_eq!(name, RelocTypeName::Unknown);
        assert_eq!(name.to_string(), "R_UNKNOWN");
        assert!(!relocation_type_name(ElfMachine::X86_64, u32::MAX).is_known());
        assert_eq!(
            relocation_type_name(ElfMachine::Unknown(0x1234), 1),
            RelocTypeName::Unknown
        );
        assert_eq!(
            relocation_type_name(ElfMachine::None, 0),
            RelocTypeName::Unknown
        );
    }

    #[test]
    fn every_covered_machine_has_a_table() {
        for machine in COVERED_MACHINES {
            let table = table_for(machine).unwrap();
            assert_eq!(table[0].0, 0, "{machine} table starts at NONE");
        }
    }
}
