//! Shared inputs for the tokenizer and parser benchmarks.

pub static CHAPTER: &str = "\\id GEN World English Bible
\\h Genesis
\\toc1 The First Book of Moses, Commonly Called Genesis
\\mt1 The First Book of Moses,
\\mt2 Commonly Called
\\mt1 Genesis
\\c 1
\\p
\\v 1 In the beginning, God created the heavens and the earth.
\\v 2 The earth was formless and empty. Darkness was on the surface of the deep and God\u{2019}s Spirit was hovering over the surface of the waters.
\\p
\\v 3 God said, \u{201c}Let there be light,\u{201d} and there was light.
\\v 4 God saw the light, and saw that it was good. God divided the light from the darkness.
\\v 5 God called the light \u{201c}day\u{201d}, and the darkness he called \u{201c}night\u{201d}. There was evening and there was morning, the first day.
\\p
\\v 6 God said, \u{201c}Let there be an expanse in the middle of the waters, and let it divide the waters from the waters.\u{201d}
\\v 7 God made the expanse, and divided the waters which were under the expanse from the waters which were above the expanse; and it was so.
\\v 8 God called the expanse \u{201c}sky\u{201d}.\\f + \\fr 1:8 \\ft \u{201c}sky\u{201d} and \u{201c}heavens\u{201d} may be translated from the same word.\\f* There was evening and there was morning, a second day.
";

/// `CHAPTER` repeated `times` times.
pub fn repeated(times: usize) -> String {
    CHAPTER.repeat(times)
}
