//! The `wortschatz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("wortschatz.toml").exists() {
        println!("wortschatz.toml already exists, skipping.");
    } else {
        std::fs::write("wortschatz.toml", SAMPLE_CONFIG)?;
        println!("Created wortschatz.toml");
    }

    std::fs::create_dir_all("data")?;
    let sample_path = std::path::Path::new("data/database 1-4.json");
    if sample_path.exists() {
        println!("data/database 1-4.json already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_DATABASE)?;
        println!("Created data/database 1-4.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your lessons to data/ and list them in wortschatz.toml");
    println!("  2. Run: wortschatz validate --file \"data/database 1-4.json\"");
    println!("  3. Run: wortschatz words --lessons all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wortschatz configuration

# Fetch databases from a web server instead of data_dir:
# base_url = "https://example.org/wortschatz"

data_dir = "data"
databases = ["database 1-4.json"]

# fetch_timeout_secs = 30
"#;

const SAMPLE_DATABASE: &str = r#"{
  "lessons": [
    {
      "number": 1,
      "name": "Begrüßung",
      "pages": [
        {
          "number": 1,
          "words": [
            { "german": "Hallo", "czech": "ahoj" },
            { "german": "der Morgen", "czech": "ráno", "plural": "die Morgen", "example": "Guten Morgen!" }
          ]
        },
        {
          "number": 2,
          "words": [
            { "german": "danke", "czech": "děkuji", "example": "Danke schön!" }
          ]
        }
      ]
    },
    {
      "number": 2,
      "name": "Familie",
      "pages": [
        {
          "number": 1,
          "words": [
            { "german": "die Mutter", "czech": "matka", "plural": "die Mütter" },
            { "german": "der Vater", "czech": "otec", "plural": "die Väter" }
          ]
        }
      ]
    }
  ]
}
"#;
