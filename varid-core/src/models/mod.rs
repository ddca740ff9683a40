pub mod rsid;
pub mod spdi;
pub mod vcf;

pub use rsid::{format_rsid, parse_rsid};
pub use spdi::Spdi;
pub use vcf::{AlleleKey, MISSING, VcfExtra, VcfKey, VcfRow};
