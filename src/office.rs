//! Plain-text extraction for the document formats `-f`/`-i` accept besides
//! raw text: Word (`.docx`), OpenDocument (`.odt`) and PDF.
//!
//! Paragraphs and explicit line breaks become `\n`, so the result splits
//! into the same lines a reader sees in the document.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Element names (without namespace prefix) that shape the extracted lines.
struct Markup {
    /// Entry inside the ZIP container holding the document body.
    entry: &'static str,
    /// Elements whose end closes a line.
    paragraphs: &'static [&'static [u8]],
    /// Elements that force a line break where they appear.
    breaks: &'static [&'static [u8]],
}

const DOCX: Markup = Markup {
    entry: "word/document.xml",
    paragraphs: &[b"p"],
    breaks: &[b"br", b"cr"],
};

const ODT: Markup = Markup {
    entry: "content.xml",
    paragraphs: &[b"p", b"h"],
    breaks: &[b"line-break"],
};

pub fn extract_text_from_docx(p: &Path) -> Result<String, String> {
    extract_from_container(p, &DOCX)
}

pub fn extract_text_from_odt(p: &Path) -> Result<String, String> {
    extract_from_container(p, &ODT)
}

pub fn extract_text_from_pdf(p: &Path) -> Result<String, String> {
    pdf_extract::extract_text(p).map_err(|e| format!("Read .pdf failed: {e}"))
}

// ---- Internal helpers ----

fn extract_from_container(p: &Path, markup: &Markup) -> Result<String, String> {
    let file = File::open(p).map_err(|e| format!("Open failed: {e}"))?;
    let mut zip = ZipArchive::new(file).map_err(|e| format!("Open zip failed: {e}"))?;
    let mut doc = zip
        .by_name(markup.entry)
        .map_err(|_| format!("Missing {}", markup.entry))?;
    let mut xml = String::new();
    doc.read_to_string(&mut xml)
        .map_err(|e| format!("Read {} failed: {e}", markup.entry))?;
    collect_lines(&xml, markup)
}

fn collect_lines(xml: &str, markup: &Markup) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut out = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if is_one_of(e.name().as_ref(), markup.breaks) {
                    out.push('\n');
                }
            }
            Ok(Event::End(e)) => {
                if is_one_of(e.name().as_ref(), markup.paragraphs) {
                    out.push('\n');
                }
            }
            Ok(Event::Text(t)) => {
                out.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("Parse {} failed: {e}", markup.entry)),
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}

fn is_one_of(name: &[u8], tags: &[&[u8]]) -> bool {
    let name = local_name(name);
    tags.iter().any(|tag| *tag == name)
}

fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}
