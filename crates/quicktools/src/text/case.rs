use crate::prelude::{eprintln, println, *};
use quicktools_core::text::{convert_all_cases, convert_case, split_words, CaseStyle};

#[derive(Debug, clap::Args, Clone)]
pub struct CaseOptions {
    /// Text to convert, `-` reads stdin
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Target style (camel, pascal, snake, kebab, ...); omit it for every style
    #[arg(short, long)]
    pub style: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
struct CaseOutput {
    style: String,
    text: String,
}

pub fn run(options: CaseOptions, global: crate::Global) -> Result<()> {
    let text = crate::input::read_line(&options.text)?;

    if global.verbose {
        eprintln!("Words: {:?}", split_words(&text));
    }

    let outputs: Vec<CaseOutput> = match &options.style {
        Some(style) => {
            let style: CaseStyle = style
                .parse()
                .map_err(|e: quicktools_core::text::CaseError| Error::InvalidInput(e.to_string()))?;
            vec![CaseOutput {
                style: style.to_string(),
                text: convert_case(&text, style),
            }]
        }
        None => convert_all_cases(&text)
            .into_iter()
            .map(|(style, text)| CaseOutput {
                style: style.to_string(),
                text,
            })
            .collect(),
    };

    if options.json {
        return print_json(&outputs);
    }

    if let [single] = outputs.as_slice() {
        println!("{}", single.text);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Style", "Text"]);
    for output in &outputs {
        table.add_row(prettytable::row![output.style, output.text]);
    }
    table.printstd();

    Ok(())
}
