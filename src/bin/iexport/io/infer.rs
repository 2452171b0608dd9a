use std::path::Path;

use interaction_exporter::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "tsv" | "tab" | "txt" | "mitab" => Some(Format::Tsv),
        "json" => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_known_extensions() {
        assert_eq!(output(Path::new("out/R-HSA-5213466.tsv")), Some(Format::Tsv));
        assert_eq!(output(Path::new("interactions.MITAB")), Some(Format::Tsv));
        assert_eq!(output(Path::new("interactions.json")), Some(Format::Json));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(output(Path::new("interactions.csv")), None);
        assert_eq!(output(Path::new("interactions")), None);
    }
}
