//! Property tests for site extraction.

use meme_align::{AlignmentFormat, ReportParser};
use proptest::prelude::*;

fn nucleotides(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(&b"ACGTacgt"[..]), min..=max)
        .prop_map(|bytes| String::from_utf8(bytes).expect("ASCII nucleotides"))
}

fn flank() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(&b"ACGTacgt."[..]), 1..=12)
        .prop_map(|bytes| String::from_utf8(bytes).expect("ASCII flank"))
}

fn site_line() -> impl Strategy<Value = (String, u64, String, String)> {
    (
        "[A-Za-z][A-Za-z0-9_.|]{0,15}",
        1u64..1_000_000,
        flank(),
        nucleotides(1, 30),
        flank(),
        1usize..6,
    )
        .prop_map(|(name, start, left, central, right, gap)| {
            let sep = " ".repeat(gap);
            let line = format!("{name}{sep}{start}{sep}1.5e-04{sep}{left}{sep}{central}{sep}{right}");
            (name, start, central, line)
        })
}

proptest! {
    #[test]
    fn extracted_sites_keep_span_and_residue_invariants(
        sites in proptest::collection::vec(site_line(), 1..20)
    ) {
        let mut report = String::from("MEME version 4.11.2\nsites sorted by position\n");
        for (_, _, _, line) in &sites {
            report.push_str(line);
            report.push('\n');
        }
        report.push('\n');

        let blocks = ReportParser::new(report.lines()).read_all().unwrap();
        prop_assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        prop_assert_eq!(block.len(), sites.len());

        for (site, (name, start, central, _)) in block.iter().zip(&sites) {
            prop_assert_eq!(site.identifier(), name.as_str());
            prop_assert_eq!(site.start(), *start);
            prop_assert_eq!(site.residues(), central.to_ascii_uppercase());
            prop_assert_eq!(site.end() - site.start() + 1, site.len() as u64);
        }
    }

    #[test]
    fn noise_outside_sections_never_produces_blocks(
        lines in proptest::collection::vec("[a-z ]{0,40}", 0..30)
    ) {
        let mut report = String::from("MEME version 5.0\n");
        for line in &lines {
            report.push_str(line);
            report.push('\n');
        }

        let blocks = ReportParser::new(report.lines()).read_all().unwrap();
        prop_assert!(blocks.is_empty());
    }
}
