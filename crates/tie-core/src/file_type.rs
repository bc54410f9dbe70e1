//! File type constants used by the external file report event.
//!
//! The values are the service's trusted file-type classification codes.
//! Composite formats carry combined bits (for example [`PEEXE`] = PE + EXE).

/// Unknown, not recognized.
pub const NONE: u64 = 0;
/// Plain binary, less than 64K.
pub const COM: u64 = 1;
/// EXE file.
pub const EXE: u64 = 2;
/// DOS driver.
pub const DRV: u64 = 4;
/// BOOT-sector image.
pub const BOOT: u64 = 8;
/// PE file.
pub const PE: u64 = 16;
/// PE-EXE file (PE + EXE).
pub const PEEXE: u64 = 18;
/// LE/W4 file (normally Windows-VxD).
pub const VXD: u64 = 64;
/// Windows DLL (16 bits).
pub const DLLNONPE: u64 = 128;
/// Windows DLL.
pub const DLL: u64 = 144;
/// Windows Executable (PE + NE + LE).
pub const WIN: u64 = 272;
/// Windows program with non-trivial DOS stub.
pub const MZSTUB: u64 = 512;
/// Netware Loadable Module.
pub const NLM: u64 = 1024;
/// Linux ELF binary.
pub const ELF: u64 = 2048;
/// Javascript file.
pub const JS: u64 = 4096;
/// VB script file.
pub const VBS: u64 = 8192;
/// Script file.
pub const SCRIPT: u64 = 12288;
/// OLE compound file.
pub const OLE: u64 = 16384;
/// Picture file.
pub const PIC: u64 = 65536;
/// Text file.
pub const TEXT: u64 = 131072;
/// Batch script (.cmd, .bat).
pub const BAT: u64 = 143360;
/// Hypertext file.
pub const HTML: u64 = 262144;
/// Hypertext file with text.
pub const HTMLTEXT: u64 = 393216;
/// Hypertext application.
pub const HTA: u64 = 524288;
/// Rich text file.
pub const RTF: u64 = 1048576;
/// Adobe Acrobat file.
pub const PDF: u64 = 2097152;
/// Music, movie or other multimedia file.
pub const MMEDIA: u64 = 4194304;
/// Text file with URL extension.
pub const URL: u64 = 8388608;
/// Portable executable system driver (.sys).
pub const SYS: u64 = 16777232;
/// ZIP archive file.
pub const ZIP: u64 = 33587200;
/// CAB archive file.
pub const CAB: u64 = 67141632;
/// RAR stream that is not an archive.
pub const RARNOARC: u64 = 134217728;
/// RAR archive file.
pub const RAR: u64 = 134250496;
/// OOXML document.
pub const OOXML: u64 = 167772160;
/// OOXML in ZIP (office format for pptx, docx, etc).
pub const OOXMLPK: u64 = 301989888;
/// Mach-O binary.
pub const MACHO: u64 = 536870912;
/// Android application package.
pub const APK: u64 = 1073741824;
/// Java class.
pub const CLASS: u64 = 2147483648;
/// Java package.
pub const JAR: u64 = 4328554496;

/// Every known file type code.
pub const KNOWN_TYPES: [u64; 39] = [
    NONE, COM, EXE, DRV, BOOT, PE, PEEXE, VXD, DLLNONPE, DLL, WIN, MZSTUB, NLM, ELF, JS, VBS,
    SCRIPT, OLE, PIC, TEXT, BAT, HTML, HTMLTEXT, HTA, RTF, PDF, MMEDIA, URL, SYS, ZIP, CAB,
    RARNOARC, RAR, OOXML, OOXMLPK, MACHO, APK, CLASS, JAR,
];

/// Whether `file_type` is one of the known file type codes.
#[must_use]
pub fn is_known(file_type: u64) -> bool {
    KNOWN_TYPES.contains(&file_type)
}
