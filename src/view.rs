// 🧱 View Assembly - district record + influencer rows → ordered display blocks
//
// Block order is fixed: title, image, name/division, image, description,
// sites table, food/innovation table, ODOP, village/river/person table,
// influencers. Renderers (HTML, JSON, TUI) walk the blocks as-is.

use crate::images::{ImageCatalog, ImageRef};
use crate::records::{
    DistrictRecord, InfluencerRecord, COL_CUISINE, COL_INNOVATION, COL_MODEL_VILLAGE,
    COL_NOTABLE_PERSON, COL_RELIGIOUS_SITES, COL_RIVER_GHAT, COL_TOURIST_SITES,
};
use crate::sanitize::safe;
use serde::Serialize;

pub const PAGE_TITLE: &str = "जिला प्रोफाइल";
pub const DIVISION_PREFIX: &str = "संभाग : ";
pub const DESCRIPTION_HEADING: &str = "जिले का विवरण";
pub const SITES_HEADING: &str = "दर्शनीय स्थल | पर्यटन स्थल";
pub const FOOD_HEADING: &str =
    "व्यंजन एवं मशहूर खान पान स्थल | जिला स्तर पर किए जा रहे विशेष नवाचार";
pub const ODOP_HEADING: &str = "ODOP उत्पाद";
pub const VILLAGE_HEADING: &str = "आदर्श ग्राम | नदी एवं घाट | प्रमुख हस्ती";
pub const INFLUENCER_HEADING: &str = "इन\u{94d}\u{200d}फ\u{94d}लुऐंशर लिस\u{94d}\u{200d}ट";
pub const NO_INFLUENCERS: &str = "कोई इन्फ्लुएंसर उपलब्ध नहीं";

/// Column names as header row, one or more value rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    /// Single-row table of `safe`d values.
    fn single(columns: &[(&str, &Option<String>)]) -> Self {
        DisplayTable {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            rows: vec![columns.iter().map(|(_, v)| safe(v.as_deref())).collect()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Image { image: ImageRef },
    District { name: String, division: String },
    Text { heading: String, body: String },
    Table { heading: String, table: DisplayTable },
    Notice { heading: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub district: String,
    pub blocks: Vec<Block>,
}

impl ProfileView {
    pub fn division_line(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::District { division, .. } => Some(division.as_str()),
            _ => None,
        })
    }

    /// Body of the text block under `heading`.
    pub fn text(&self, heading: &str) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Text { heading: h, body } if h == heading => Some(body.as_str()),
            _ => None,
        })
    }

    pub fn table(&self, heading: &str) -> Option<&DisplayTable> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table { heading: h, table } if h == heading => Some(table),
            _ => None,
        })
    }
}

/// Assemble the profile page for `selection`. The district name shown is the
/// selection itself, not the record's name cell.
pub fn build_view(
    selection: &str,
    record: &DistrictRecord,
    influencers: &[InfluencerRecord],
    images: &ImageCatalog,
) -> ProfileView {
    let mut blocks = vec![Block::Title {
        text: PAGE_TITLE.to_string(),
    }];

    if let Some(image) = images.primary(selection) {
        blocks.push(Block::Image { image });
    }

    blocks.push(Block::District {
        name: selection.to_string(),
        division: format!("{}{}", DIVISION_PREFIX, safe(record.division.as_deref())),
    });

    if let Some(image) = images.secondary(selection) {
        blocks.push(Block::Image { image });
    }

    blocks.push(Block::Text {
        heading: DESCRIPTION_HEADING.to_string(),
        body: safe(record.description.as_deref()),
    });

    blocks.push(Block::Table {
        heading: SITES_HEADING.to_string(),
        table: DisplayTable::single(&[
            (COL_RELIGIOUS_SITES, &record.religious_sites),
            (COL_TOURIST_SITES, &record.tourist_sites),
        ]),
    });

    blocks.push(Block::Table {
        heading: FOOD_HEADING.to_string(),
        table: DisplayTable::single(&[
            (COL_CUISINE, &record.cuisine),
            (COL_INNOVATION, &record.innovation),
        ]),
    });

    // safe() never returns an empty string, so this block is always emitted
    let odop = safe(record.odop_product.as_deref());
    if !odop.is_empty() {
        blocks.push(Block::Text {
            heading: ODOP_HEADING.to_string(),
            body: odop,
        });
    }

    blocks.push(Block::Table {
        heading: VILLAGE_HEADING.to_string(),
        table: DisplayTable::single(&[
            (COL_MODEL_VILLAGE, &record.model_village),
            (COL_RIVER_GHAT, &record.river_ghat),
            (COL_NOTABLE_PERSON, &record.notable_person),
        ]),
    });

    if influencers.is_empty() {
        blocks.push(Block::Notice {
            heading: INFLUENCER_HEADING.to_string(),
            message: NO_INFLUENCERS.to_string(),
        });
    } else {
        blocks.push(Block::Table {
            heading: INFLUENCER_HEADING.to_string(),
            table: DisplayTable {
                headers: InfluencerRecord::HEADERS.iter().map(|h| h.to_string()).collect(),
                rows: influencers.iter().map(InfluencerRecord::to_row).collect(),
            },
        });
    }

    ProfileView {
        district: selection.to_string(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{default_image_keys, BACKGROUND_IMAGE};
    use crate::records::fixtures::{district_table, influencer_table};
    use crate::records::{find_district, find_influencers};
    use crate::sanitize::NO_INFO;
    use std::fs;

    fn no_images() -> ImageCatalog {
        ImageCatalog::new("/nonexistent/images", default_image_keys(), BACKGROUND_IMAGE)
    }

    fn sehore_view(images: &ImageCatalog) -> ProfileView {
        let record = find_district(&district_table(), "सीहोर").unwrap();
        build_view("सीहोर", &record, &[], images)
    }

    #[test]
    fn test_sparse_district_renders_no_info() {
        let view = sehore_view(&no_images());

        assert_eq!(view.division_line(), Some("संभाग : भोपाल"));
        assert_eq!(view.text(DESCRIPTION_HEADING), Some("टेस्ट"));
        assert_eq!(view.text(ODOP_HEADING), Some(NO_INFO));

        for heading in [SITES_HEADING, FOOD_HEADING, VILLAGE_HEADING] {
            let table = view.table(heading).unwrap();
            assert_eq!(table.rows.len(), 1);
            assert!(table.rows[0].iter().all(|v| v == NO_INFO), "{}", heading);
        }
    }

    #[test]
    fn test_block_order_without_images() {
        let view = sehore_view(&no_images());
        let kinds: Vec<&str> = view
            .blocks
            .iter()
            .map(|b| match b {
                Block::Title { .. } => "title",
                Block::Image { .. } => "image",
                Block::District { .. } => "district",
                Block::Text { .. } => "text",
                Block::Table { .. } => "table",
                Block::Notice { .. } => "notice",
            })
            .collect();

        assert_eq!(
            kinds,
            vec!["title", "district", "text", "table", "table", "text", "table", "notice"]
        );
        assert_eq!(view.blocks[0], Block::Title { text: PAGE_TITLE.to_string() });
    }

    #[test]
    fn test_images_surround_district_heading() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Sehore.png"), b"png").unwrap();
        fs::write(dir.path().join("Sehore2.png"), b"png").unwrap();
        let images = ImageCatalog::new(dir.path(), default_image_keys(), BACKGROUND_IMAGE);

        let view = sehore_view(&images);

        assert!(matches!(&view.blocks[1], Block::Image { image } if image.file == "Sehore.png"));
        assert!(matches!(&view.blocks[2], Block::District { name, .. } if name == "सीहोर"));
        assert!(matches!(&view.blocks[3], Block::Image { image } if image.file == "Sehore2.png"));
    }

    #[test]
    fn test_empty_influencers_render_notice() {
        let view = sehore_view(&no_images());
        assert_eq!(
            view.blocks.last(),
            Some(&Block::Notice {
                heading: INFLUENCER_HEADING.to_string(),
                message: NO_INFLUENCERS.to_string(),
            })
        );
        assert!(view.table(INFLUENCER_HEADING).is_none());
    }

    #[test]
    fn test_influencer_table_keeps_blank_cells_empty() {
        let record = find_district(&district_table(), "भोपाल").unwrap();
        let influencers = find_influencers(&influencer_table(), "भोपाल");
        let view = build_view("भोपाल", &record, &influencers, &no_images());

        let table = view.table(INFLUENCER_HEADING).unwrap();
        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["श्याम", "@shyam", "", ""]);
        assert!(!table.rows.iter().flatten().any(|v| v == NO_INFO));
    }

    #[test]
    fn test_district_name_comes_from_selection() {
        let record = find_district(&district_table(), "भोपाल").unwrap();
        let view = build_view(" भोपाल", &record, &[], &no_images());
        assert_eq!(view.district, " भोपाल");
        assert!(matches!(&view.blocks[1], Block::District { name, .. } if name == " भोपाल"));
    }
}
