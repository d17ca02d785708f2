//! Field extraction from vendor locator pages.
//!
//! The pages are static HTML with an hCard-style detail block. Extraction is
//! regex/string scanning over the body; no DOM library is involved.

use regex::Regex;

use findus_core::Coordinate;

use crate::error::ScraperError;

/// Raw fields extracted from one station detail page, before translation,
/// reconciliation and assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPage {
    pub name: String,
    /// First line of the address block, untranslated.
    pub address_line: Option<String>,
    /// Five-digit zero-padded postal code, or empty.
    pub postal_code: String,
    /// Raw charger panel lines, page order.
    pub charger_lines: Vec<String>,
    /// Coordinate when the page carries one directly.
    pub coordinate: Option<Coordinate>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub amenities: Vec<String>,
    /// Station not yet open; disqualifies the record.
    pub opening_soon: bool,
}

/// Extract station detail URLs from a list page, in page order.
///
/// Each station entry is an `<address>` block whose first anchor links to
/// the detail page.
#[must_use]
pub fn extract_detail_urls(html: &str, base_url: &str) -> Vec<String> {
    let address_block = Regex::new(r"(?is)<address[^>]*>(.*?)</address>")
        .expect("valid address block regex");
    let href = Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).expect("valid href regex");

    let base = base_url.trim_end_matches('/');
    let mut urls = Vec::new();
    for block in address_block.captures_iter(html) {
        if let Some(caps) = href.captures(&block[1]) {
            let suffix = &caps[1];
            if suffix.starts_with("http") {
                urls.push(suffix.to_owned());
            } else {
                urls.push(format!("{base}{suffix}"));
            }
        }
    }
    urls
}

/// Parse a station detail page into its raw fields.
///
/// # Errors
///
/// Returns [`ScraperError::Structural`] when the page lacks the `<h1>`
/// title every detail page carries; that shape violation indicates the
/// extractor itself is stale and the whole run must stop.
pub fn parse_detail_page(html: &str, url: &str) -> Result<DetailPage, ScraperError> {
    let h1 = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid h1 regex");
    let Some(title) = h1.captures(html).map(|caps| strip_tags(&caps[1])) else {
        return Err(ScraperError::Structural {
            url: url.to_owned(),
            reason: "missing <h1> station title".to_owned(),
        });
    };

    // A redirect back to the locator index or a ribbon badge both mean the
    // station is not open yet.
    let opening_soon = title.contains("Find Us") || html.contains("tsla-icon-star-ribbon");
    if opening_soon {
        return Ok(DetailPage {
            name: title,
            opening_soon: true,
            ..DetailPage::default()
        });
    }

    Ok(DetailPage {
        name: title,
        address_line: extract_span(html, "street-address"),
        postal_code: extract_span(html, "postal-code")
            .as_deref()
            .map(normalize_postal)
            .unwrap_or_default(),
        charger_lines: extract_charger_lines(html),
        coordinate: extract_map_coordinate(html),
        website: extract_website(html),
        phone: extract_span(html, "tel"),
        amenities: extract_amenities(html),
        opening_soon: false,
    })
}

fn extract_span(html: &str, class: &str) -> Option<String> {
    let pattern = format!(r#"(?is)<span[^>]*class="[^"]*{class}[^"]*"[^>]*>(.*?)</span>"#);
    let re = Regex::new(&pattern).expect("valid span class regex");
    re.captures(html)
        .map(|caps| strip_tags(&caps[1]))
        .filter(|text| !text.is_empty())
}

/// Charger panel lines live in the `<p>` paragraphs mentioning 충전,
/// one line per `<br>`.
fn extract_charger_lines(html: &str) -> Vec<String> {
    let paragraph = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph regex");
    let line_break = Regex::new(r"(?i)<br\s*/?>").expect("valid br regex");

    let mut lines = Vec::new();
    for caps in paragraph.captures_iter(html) {
        let body = &caps[1];
        if !body.contains("충전") {
            continue;
        }
        for piece in line_break.split(body) {
            let line = strip_tags(piece);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
    lines
}

/// The static-map image URL embeds the coordinate; see
/// [`coordinate_from_map_url`] for the query shape.
fn extract_map_coordinate(html: &str) -> Option<Coordinate> {
    let map_img = Regex::new(r#"(?is)id="location-map".*?<img[^>]+src="([^"]+)""#)
        .expect("valid map img regex");
    let src = map_img.captures(html)?;
    coordinate_from_map_url(&src[1])
}

/// Parse `lat,lng` out of a static-map URL. The coordinate rides in the
/// query segment whose key is `scale` and which splits into three parts on
/// `=`, the third being the comma-separated pair.
pub(crate) fn coordinate_from_map_url(url: &str) -> Option<Coordinate> {
    let (_, query) = url.split_once('?')?;
    for segment in query.split('&') {
        let parts: Vec<&str> = segment.split('=').collect();
        if parts.len() == 3 && parts[0] == "scale" {
            let (raw_lat, raw_lng) = parts[2].split_once(',')?;
            let latitude: f64 = raw_lat.parse().ok()?;
            let longitude: f64 = raw_lng.parse().ok()?;
            return Some(Coordinate::new(latitude, longitude));
        }
    }
    None
}

fn extract_website(html: &str) -> Option<String> {
    let re = Regex::new(r#"(?is)<a[^>]*class="[^"]*url[^"]*"[^>]*href="([^"]+)""#)
        .expect("valid website regex");
    re.captures(html).map(|caps| caps[1].to_owned())
}

fn extract_amenities(html: &str) -> Vec<String> {
    let list = Regex::new(r#"(?is)<ul[^>]*class="[^"]*amenities[^"]*"[^>]*>(.*?)</ul>"#)
        .expect("valid amenities list regex");
    let item = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("valid list item regex");

    let Some(caps) = list.captures(html) else {
        return Vec::new();
    };
    let body = caps.get(1).map_or("", |m| m.as_str());
    item.captures_iter(body)
        .map(|li| strip_tags(&li[1]))
        .filter(|text| !text.is_empty())
        .collect()
}

fn normalize_postal(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.is_empty() && raw.len() <= 5 && raw.chars().all(|ch| ch.is_ascii_digit()) {
        format!("{raw:0>5}")
    } else {
        String::new()
    }
}

fn strip_tags(fragment: &str) -> String {
    let tags = Regex::new(r"<[^>]+>").expect("valid tags regex");
    let text = tags.replace_all(fragment, "");
    text.replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_owned()
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
