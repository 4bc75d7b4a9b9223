mod views;

use super::{Corpus, Entry};

pub(super) fn sample_corpus() -> Corpus {
    let entries = vec![
        Entry::new("horse", "n. hestur").with_page(210),
        Entry::new("Horse Guards", "n. lífvarðarsveit").with_page(0),
        Entry::new("abstract", "l. óhlutstæður; n. ágrip").with_page(3),
        Entry::new("run", "s. hlaupa").with_page(380).with_ipa("rʌn", "rʌn"),
        Entry::new("run", "n. hlaup").with_page(380),
        Entry::new("café", "n. kaffihús").with_page(0),
        Entry::new("quickly", "ao. fljótt").with_page(350),
    ];
    Corpus::from_entries(entries).unwrap()
}
