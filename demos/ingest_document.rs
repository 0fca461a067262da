//! Document Ingestion
//!
//! The minimal end-to-end run: parsed elements in, JSONL records out.
//!
//! ```bash
//! cargo run --example ingest_document
//! ```

use chaff::{
    Element, Enrichment, HeuristicTokenizer, ParseOutcome, Pipeline, PipelineConfig, SectionNode,
    write_jsonl,
};

fn main() -> chaff::Result<()> {
    // What a document parser would hand over for a short datasheet.
    let overview = vec![SectionNode::new("Overview", 1)];
    let power = vec![SectionNode::new("Power Supply", 1)];
    let toc = vec![SectionNode::new("Table of Contents", 1)];

    let elements = vec![
        // Boilerplate: dropped by section name.
        Element::paragraph("1 Overview ... 2\n2 Power Supply ... 4").in_section(toc),
        Element::paragraph(
            "The module integrates a 2.4 GHz transceiver with an on-board \
             antenna and exposes the full GPIO bank of the host controller. \
             All radio calibration data is stored in eFuse at the factory, \
             so no per-board tuning is required during assembly.",
        )
        .on_page(2)
        .in_section(overview),
        Element::paragraph(
            "A single 3.3 V rail powers the module. Peak transmit current \
             reaches 350 mA, so the regulator and its decoupling network \
             must be sized for bursts well above the average draw.",
        )
        .on_page(4)
        .in_section(power.clone()),
        // Tables always stand alone.
        Element::table(
            "| rail | min | typ | max |\n\
             |------|-----|-----|-----|\n\
             | VDD | 3.0 V | 3.3 V | 3.6 V |",
        )
        .on_page(4)
        .in_section(power),
    ];

    // A small budget keeps the demo output readable; production runs use
    // the 1000-token default.
    let config = PipelineConfig {
        token_budget: 60,
        min_words: 10,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config, HeuristicTokenizer)?;
    let records = pipeline.process(
        "datasheet.pdf",
        ParseOutcome::Parsed(elements),
        &Enrichment {
            product: Some("ESP32-C3-MINI".to_string()),
            category: Some("wireless".to_string()),
            ..Enrichment::default()
        },
    )?;

    eprintln!("accepted {} records", records.len());
    write_jsonl(std::io::stdout().lock(), &records)?;
    Ok(())
}
