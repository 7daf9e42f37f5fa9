use camino::Utf8PathBuf;
use csfm_errors::{Diagnostic, TextRange};
use salsa::{Accumulator, Database};

#[salsa::input]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(deref)]
    pub text: Vec<u8>,
}

#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    let document = match csfm_parse::parse(file.text(db)) {
        Ok(document) => document,
        Err(err) => {
            Diagnostic::error(err.to_string(), TextRange::empty(0.into())).accumulate(db);
            return;
        }
    };

    for id in document.malformed() {
        Diagnostic::warning("marker has an empty name", document[id].range).accumulate(db);
    }
}
