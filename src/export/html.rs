//! Static anchor document
//!
//! Every state becomes an `<a id=…>` block that is only visible while it is
//! the URL fragment target. Each block is followed by four links, in edge
//! order, whose arrows come from the stylesheet. Moving is following a link
//! and undo is the browser's back button.

use std::io::Write;

use crate::{
    Result,
    graph::{State, StateGraph},
    puzzle::Tile,
};

const STYLE: &str = r#"<style>
p { min-height: 100px; }
p > span { display: block; position: absolute; width: 100%; }
p > span > a {
  display: block; width: 450px; max-width: 90%; margin: auto; padding: 30px 0;
  background-color: black; color: white; font-family: monospace; font-size: 18px;
  font-weight: bold; text-align: center;
}
p > a { display: none; }
p > a:target {
  display: block; position: relative; width: 500px; max-width: 100%; margin: auto;
  background-color: black;
}
p > a:target b:nth-child(1):not(:only-child) {
  display: block; width: 100%; height: 80px; margin: auto;
  background-color: black; color: white; font-family: monospace; font-size: 14px;
}
p > a:target b:only-child { padding-top: 80px; }
p > a:target b:last-child {
  display: block; width: 200px; margin: auto; overflow-wrap: anywhere;
  background-color: black; color: white; font-family: monospace; font-size: 40px;
  text-align: center; text-decoration: none;
}
a + b { display: none; }
a:target + b { display: block; width: 500px; max-width: 100%; margin: auto; text-align: center; }
b a { padding: 5px 15px; font-family: sans-serif; font-size: 30pt; color: blue; }
p a i { color: #78F; font-style: normal; }
p a s { color: #4F4; text-decoration: none; }
p a strong { color: yellow; font-style: normal; }
p a em { color: red; font-style: normal; }
p a u { color: #F4F; text-decoration: none; }
b a:nth-child(1)::after { content: "<"; }
b a:nth-child(2)::after { content: "v"; }
b a:nth-child(3)::after { content: "^"; }
b a:nth-child(4)::after { content: ">"; }
</style>"#;

/// Write the complete document for `graph`.
pub fn write_html<W: Write>(graph: &StateGraph, mut out: W) -> Result<()> {
    let start = graph
        .start()
        .map(|state| state.id.anchor())
        .unwrap_or_else(|| "1".to_string());

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "{STYLE}\n</head>\n<body>")?;
    write!(
        out,
        "<p><span><a href=\"#{start}\">#.<i>0</i>.<u>^</u>.# Click to Begin... #.<em>@</em>.<strong>$</strong>.#</a></span>"
    )?;

    for state in graph {
        write_state(state, &mut out)?;
    }

    writeln!(out, "</p>\n</body>\n</html>")?;
    out.flush()?;
    Ok(())
}

/// Render the document into a string.
pub fn render(graph: &StateGraph) -> Result<String> {
    let mut buffer = Vec::new();
    write_html(graph, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_state<W: Write>(state: &State, out: &mut W) -> Result<()> {
    let id = state.id.anchor();
    write!(out, "<a id=\"{id}\" name=\"{id}\">")?;
    if !state.message.is_empty() {
        write!(out, "<b>{}</b>", escape(&state.message))?;
    }
    let board: Vec<String> = state.rows().map(styled_row).collect();
    write!(out, "<b>{}</b></a><b>", board.join(" "))?;
    for edge in state.edges {
        write!(out, "<a href=\"#{}\"></a>", edge.anchor())?;
    }
    write!(out, "</b>")?;
    Ok(())
}

fn styled_row(row: &str) -> String {
    let mut out = String::with_capacity(row.len() * 4);
    for c in row.chars() {
        match Tile::from_char(c) {
            Some(Tile::Stairs) => out.push_str("<s>&gt;</s>"),
            Some(Tile::Player) => out.push_str("<em>@</em>"),
            Some(Tile::Collectible) => out.push_str("<strong>$</strong>"),
            Some(Tile::Pit) => out.push_str("<u>^</u>"),
            Some(Tile::Boulder) => out.push_str("<i>0</i>"),
            _ => out.push(c),
        }
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_wrapped_and_floor_is_plain() {
        assert_eq!(
            styled_row("#@0^$>."),
            "#<em>@</em><i>0</i><u>^</u><strong>$</strong><s>&gt;</s>."
        );
    }

    #[test]
    fn messages_are_escaped() {
        assert_eq!(escape("walls (#) & <stairs>"), "walls (#) &amp; &lt;stairs&gt;");
        assert_eq!(escape("who's"), "who&#39;s");
    }
}
