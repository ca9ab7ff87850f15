// src/store.rs
//! `gamelist.xml`: one `<game>` per downloaded cartridge.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <gameList>
//!   <game>
//!     <path>./panda.tic</path>
//!     <name>panda</name>
//!     <desc>…</desc>
//!     <developer>…</developer>
//!     <image>./images/panda.gif</image>
//!   </game>
//! </gameList>
//! ```
//!
//! Append-only. Running twice over the same listing yields two records per
//! cartridge; nothing here deduplicates.
//!
//! Files written by other tools (EmulationStation, scrapers) carry more than
//! we model: `<folder>`/`<provider>` next to the games, attributes on
//! `<game>`, extra or missing fields. Everything read from disk is kept as
//! written (start tags and element bodies verbatim) so a rewrite only adds
//! the new records. Comments and whitespace between elements are not kept.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use quick_xml::{
    escape::{escape, unescape},
    events::{BytesStart, Event},
    Reader,
};

use crate::config::consts::{GAMELIST_FILE, IMAGES_SUBDIR};
use crate::core::sanitize::file_stem;
use crate::error::ScrapeError;
use crate::file::ensure_directory;

const ROOT_TAG: &str = "gameList";
const GAME_TAG: &str = "game";

/// One child element of `<game>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    /// Start tag contents: the name plus any attributes
    head: String,
    /// Escaped markup between start and end tag; None for `<tag/>`
    body: Option<String>,
}

impl Field {
    pub fn text(tag: &str, value: &str) -> Self {
        Self { tag: s!(tag), head: s!(tag), body: Some(escape(value).into_owned()) }
    }

    /// Decoded text content. `<tag/>` reads as "".
    pub fn value(&self) -> String {
        let Some(body) = self.body.as_deref() else { return s!() };
        let body = body.trim();
        if let Some(raw) = body.strip_prefix("<![CDATA[").and_then(|b| b.strip_suffix("]]>")) {
            return s!(raw);
        }
        unescape(body).map(Cow::into_owned).unwrap_or_else(|_| s!(body))
    }

    fn push_xml(&self, out: &mut String) {
        out.push_str("    <");
        out.push_str(&self.head);
        match &self.body {
            Some(body) => {
                out.push('>');
                out.push_str(body);
                out.push_str("</");
                out.push_str(&self.tag);
                out.push_str(">\n");
            }
            None => out.push_str("/>\n"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Start tag contents (`game id="42" source="…"`)
    head: String,
    /// In document order
    pub fields: Vec<Field>,
}

impl GameRecord {
    /// Record for a cartridge saved as `<folder>/<filename>`,
    /// with cover art (if any) saved as `<folder>/images/<image_file>`.
    /// Paths are relative to the gamelist's folder; no cover → no `<image>`.
    pub fn for_cartridge(filename: &str, desc: &str, developer: &str, image_file: Option<&str>) -> Self {
        let mut fields = vec![
            Field::text("path", &format!("./{filename}")),
            Field::text("name", file_stem(filename)),
            Field::text("desc", desc),
            Field::text("developer", developer),
        ];
        if let Some(f) = image_file {
            fields.push(Field::text("image", &format!("./{IMAGES_SUBDIR}/{f}")));
        }
        Self { head: s!(GAME_TAG), fields }
    }

    /// Text of the first `<tag>` child.
    pub fn get(&self, tag: &str) -> Option<String> {
        self.fields.iter().find(|f| f.tag == tag).map(Field::value)
    }

    pub fn path(&self) -> Option<String> {
        self.get("path")
    }

    pub fn name(&self) -> Option<String> {
        self.get("name")
    }

    pub fn desc(&self) -> Option<String> {
        self.get("desc")
    }

    pub fn developer(&self) -> Option<String> {
        self.get("developer")
    }

    pub fn image(&self) -> Option<String> {
        self.get("image")
    }

    /// Attribute on the `<game>` tag itself.
    pub fn attr(&self, name: &str) -> Option<String> {
        let start = BytesStart::from_content(self.head.as_str(), GAME_TAG.len());
        let attr = start.try_get_attribute(name).ok()??;
        attr.unescape_value().ok().map(Cow::into_owned)
    }

    fn push_xml(&self, out: &mut String) {
        out.push_str("  <");
        out.push_str(&self.head);
        if self.fields.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        for f in &self.fields {
            f.push_xml(out);
        }
        out.push_str("  </game>\n");
    }
}

/// A non-`<game>` child of the root, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sibling {
    /// Number of games that precede it
    pub at: usize,
    pub markup: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameList {
    /// Root start tag contents, if read from a file
    root: Option<String>,
    pub games: Vec<GameRecord>,
    pub siblings: Vec<Sibling>,
}

fn head_of(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e).into_owned()
}

fn tag_of(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

impl GameList {
    pub fn path_in(folder: &Path) -> PathBuf {
        folder.join(GAMELIST_FILE)
    }

    /// Missing file → empty list. Unparseable file → `Gamelist` error.
    pub fn load(path: &Path) -> Result<Self, ScrapeError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| ScrapeError::fs(path, e))?;
        Self::parse(&text).map_err(|cause| ScrapeError::Gamelist { path: path.to_path_buf(), cause })
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut list = GameList::default();
        let mut root_closed = false;

        loop {
            let at = reader.buffer_position();
            let ev = reader.read_event().map_err(|e| format!("at byte {at}: {e}"))?;
            match ev {
                Event::Start(e) => {
                    let tag = tag_of(&e);
                    if root_closed {
                        return Err(format!("<{tag}> after </{ROOT_TAG}>"));
                    }
                    if list.root.is_none() {
                        if tag != ROOT_TAG {
                            return Err(format!("expected <{ROOT_TAG}>, found <{tag}>"));
                        }
                        list.root = Some(head_of(&e));
                        continue;
                    }
                    // Whole element in one go; the body stays as written
                    let head = head_of(&e);
                    let body = reader
                        .read_text(e.name())
                        .map_err(|err| format!("inside <{tag}>: {err}"))?;
                    if tag == GAME_TAG {
                        list.games.push(GameRecord { head, fields: parse_fields(&body)? });
                    } else {
                        list.siblings.push(Sibling {
                            at: list.games.len(),
                            markup: format!("<{head}>{body}</{tag}>"),
                        });
                    }
                }
                Event::Empty(e) => {
                    let tag = tag_of(&e);
                    if root_closed {
                        return Err(format!("<{tag}/> after </{ROOT_TAG}>"));
                    }
                    if list.root.is_none() {
                        if tag != ROOT_TAG {
                            return Err(format!("expected <{ROOT_TAG}>, found <{tag}/>"));
                        }
                        list.root = Some(head_of(&e));
                        root_closed = true;
                    } else if tag == GAME_TAG {
                        list.games.push(GameRecord { head: head_of(&e), fields: Vec::new() });
                    } else {
                        list.siblings.push(Sibling {
                            at: list.games.len(),
                            markup: format!("<{}/>", head_of(&e)),
                        });
                    }
                }
                // Children are consumed whole by read_text, so this closes the root
                Event::End(_) => root_closed = true,
                Event::Eof => break,
                // Decl, comments, PIs, doctype, stray text
                _ => {}
            }
        }

        if list.root.is_none() {
            return Err(format!("missing <{ROOT_TAG}> root"));
        }
        if !root_closed {
            return Err(format!("unexpected end of file inside <{ROOT_TAG}>"));
        }
        Ok(list)
    }

    /// UTF-8 declaration, two-space indent, trailing newline.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<");
        out.push_str(self.root.as_deref().unwrap_or(ROOT_TAG));
        out.push_str(">\n");

        let push_siblings = |out: &mut String, keep: &dyn Fn(usize) -> bool| {
            for s in self.siblings.iter().filter(|s| keep(s.at)) {
                out.push_str("  ");
                out.push_str(&s.markup);
                out.push('\n');
            }
        };

        for (i, g) in self.games.iter().enumerate() {
            push_siblings(&mut out, &|at| at == i);
            g.push_xml(&mut out);
        }
        let n = self.games.len();
        push_siblings(&mut out, &|at| at >= n);

        out.push_str("</gameList>\n");
        out
    }

    /// Overwrite `path` with the whole list.
    pub fn save(&self, path: &Path) -> Result<(), ScrapeError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(path, self.to_xml()).map_err(|e| ScrapeError::fs(path, e))
    }
}

/// Children of one `<game>`, from its raw body.
fn parse_fields(body: &str) -> Result<Vec<Field>, String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut fields = Vec::new();
    loop {
        match reader.read_event().map_err(|e| format!("inside <{GAME_TAG}>: {e}"))? {
            Event::Start(e) => {
                let tag = tag_of(&e);
                let inner = reader
                    .read_text(e.name())
                    .map_err(|err| format!("inside <{tag}>: {err}"))?;
                fields.push(Field { tag, head: head_of(&e), body: Some(inner.into_owned()) });
            }
            Event::Empty(e) => fields.push(Field { tag: tag_of(&e), head: head_of(&e), body: None }),
            Event::End(e) => {
                return Err(format!("stray </{}> inside <{GAME_TAG}>", String::from_utf8_lossy(e.name().as_ref())));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(fields)
}

/// Load `<folder>/gamelist.xml` (or start empty), append `record`, write it back.
/// Returns the number of records now in the file.
pub fn append_record(folder: &Path, record: GameRecord) -> Result<usize, ScrapeError> {
    let path = GameList::path_in(folder);
    let mut list = GameList::load(&path)?;
    list.games.push(record);
    list.save(&path)?;
    Ok(list.games.len())
}
