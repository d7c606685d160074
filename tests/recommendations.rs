use std::io::Write;

use closet_harmony::config::ConfigError;
use closet_harmony::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ids<T: Wearable>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

#[test]
fn red_base_scenario() {
    init_logging();
    let base = ClosetItem::new("red-dress", "#FF0000");
    let pool = vec![
        base.clone(),
        ClosetItem::new("cyan-scarf", "#00FFFF"),
        ClosetItem::new("orange-cardigan", "#FF8800"),
        ClosetItem::new("crimson-heels", "#FF0022"),
        ClosetItem::uncolored("belt"),
        ClosetItem::new("green-pants", "#00FF00"),
    ];
    let recs = classify(&base, &pool);
    assert_eq!(ids(&recs.complementary), vec!["cyan-scarf"]);
    assert_eq!(ids(&recs.analogous), vec!["orange-cardigan"]);
    assert_eq!(ids(&recs.monochromatic), vec!["crimson-heels"]);
}

#[test]
fn empty_inputs_degrade_to_empty_sets() {
    init_logging();
    let base = ClosetItem::new("red-dress", "#FF0000");
    let empty: Vec<ClosetItem> = Vec::new();
    assert!(classify(&base, &empty).is_empty());
    let uncolored = vec![ClosetItem::uncolored("a"), ClosetItem::new("b", "")];
    assert!(classify(&base, &uncolored).is_empty());
}

// a record type from some other part of the product, classified without conversion
struct Listing {
    sku: u32,
    sku_str: String,
    swatch: Option<&'static str>,
}

impl Listing {
    fn new(sku: u32, swatch: Option<&'static str>) -> Listing {
        Listing {
            sku,
            sku_str: sku.to_string(),
            swatch,
        }
    }
}

impl Wearable for Listing {
    fn id(&self) -> &str {
        &self.sku_str
    }

    fn primary_color(&self) -> Option<&str> {
        self.swatch
    }
}

#[test]
fn custom_wearable() {
    let base = Listing::new(1, Some("#0000FF"));
    let pool = vec![
        Listing::new(2, Some("#FFFF00")),
        Listing::new(3, Some("#0011FF")),
        Listing::new(4, None),
    ];
    let recs = classify(&base, &pool);
    assert_eq!(recs.complementary.iter().map(|l| l.sku).collect::<Vec<_>>(), vec![2]);
    assert_eq!(recs.monochromatic.iter().map(|l| l.sku).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn thresholds_from_file() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "monochromatic = 5.0").unwrap();
    writeln!(file, "analogous = 10.0").unwrap();
    let thresholds = HarmonyThresholds::load(file.path()).unwrap();
    assert_eq!(thresholds.monochromatic, 5.0);
    assert_eq!(thresholds.complementary, 20.0);

    // crimson (352) is 8 degrees off red: monochromatic by default, nothing with a 5 degree window
    let engine = HarmonyEngine::new(thresholds);
    assert_eq!(engine.harmony_between("#FF0000", "#FF0022"), None);
    assert_eq!(
        HarmonyEngine::default().harmony_between("#FF0000", "#FF0022"),
        Some(Harmony::Monochromatic)
    );

    assert!(matches!(
        HarmonyThresholds::load(file.path().with_extension("missing")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn closet_from_csv_file() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "id,name,category,color\n\
         1,White Tee,top,#FFFFFF\n\
         2,Blue Jeans,bottom,#93C5FD\n\
         5,Blue Sweater,Tops,#60A5FA\n\
         8,Orange Skirt,bottom,#FDBA74\n\
         9,Olive Jacket,top,Olive\n"
    )
    .unwrap();
    let closet = Closet::load_csv(file.path()).unwrap();
    assert_eq!(closet.len(), 5);

    let bottoms: Vec<&str> = closet
        .filter(CategoryFilter::Only(Category::Bottom))
        .iter()
        .map(|item| item.id())
        .collect();
    assert_eq!(bottoms, vec!["2", "8"]);

    let recs = closet.recommend(&HarmonyEngine::default(), "8").unwrap();
    assert_eq!(ids(&recs.complementary), vec!["2", "5"]);
    // olive is hue 60, thirty degrees off the skirt's 30.7, right on the analogous reference
    assert_eq!(ids(&recs.analogous), vec!["1", "9"]);
}
