//! Render a [`PanelLayout`] to the endpoint's UI extension XML.

use std::io::Cursor;

use pwa_common::{PwaError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::layout::{Page, PanelLayout, Row, Widget, EXTENSIONS_VERSION};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn xml_err(e: impl std::fmt::Display) -> PwaError {
    PwaError::Panel(format!("failed to write panel xml: {e}"))
}

fn start(w: &mut XmlWriter, tag: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_err)
}

fn end(w: &mut XmlWriter, tag: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(tag))).map_err(xml_err)
}

/// `<tag>text</tag>`, with `text` escaped.
fn element(w: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    start(w, tag)?;
    w.write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    end(w, tag)
}

fn empty(w: &mut XmlWriter, tag: &str) -> Result<()> {
    w.write_event(Event::Empty(BytesStart::new(tag)))
        .map_err(xml_err)
}

fn write_widget(w: &mut XmlWriter, widget: &Widget) -> Result<()> {
    start(w, "Widget")?;
    element(w, "WidgetId", &widget.id)?;
    if let Some(name) = &widget.name {
        element(w, "Name", name)?;
    }
    element(w, "Type", widget.kind.as_str())?;
    element(w, "Options", &widget.options)?;
    end(w, "Widget")
}

fn write_row(w: &mut XmlWriter, row: &Row) -> Result<()> {
    start(w, "Row")?;
    element(w, "Name", &row.name)?;
    if let Some(options) = &row.options {
        element(w, "Options", options)?;
    }
    for widget in &row.widgets {
        write_widget(w, widget)?;
    }
    end(w, "Row")
}

fn write_page(w: &mut XmlWriter, page: &Page) -> Result<()> {
    start(w, "Page")?;
    element(w, "Name", &page.name)?;
    for row in &page.rows {
        write_row(w, row)?;
    }
    empty(w, "Options")?;
    end(w, "Page")
}

/// Produce the `<Extensions>` document for `Panel Save`.
pub fn render(layout: &PanelLayout) -> Result<String> {
    let mut w = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    start(&mut w, "Extensions")?;
    element(&mut w, "Version", EXTENSIONS_VERSION)?;
    start(&mut w, "Panel")?;
    element(&mut w, "Order", &layout.order.to_string())?;
    element(&mut w, "Type", "Statusbar")?;
    element(&mut w, "Location", "HomeScreen")?;
    element(&mut w, "Icon", &layout.icon)?;
    element(&mut w, "Color", &layout.color)?;
    element(&mut w, "Name", &layout.name)?;
    element(&mut w, "ActivityType", "Custom")?;
    for page in &layout.pages {
        write_page(&mut w, page)?;
    }
    end(&mut w, "Panel")?;
    end(&mut w, "Extensions")?;

    String::from_utf8(w.into_inner().into_inner()).map_err(xml_err)
}
