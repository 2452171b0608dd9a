//! Cross-reference resolution for a single physical entity.
//!
//! Candidates are gathered in a fixed order (the entity's own `reactome`
//! reference, its attached cross-references, then its reference entity's
//! identifier, cross-references and pattern-matched secondary identifiers)
//! and then filtered in one late pass against [`RECOGNIZED_DATABASES`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::model::entity::{PhysicalEntity, ReferenceEntity};
use crate::model::xref::CrossReference;

/// Databases whose references are published; all others are dropped.
pub const RECOGNIZED_DATABASES: [&str; 13] = [
    "ChEBI",
    "chembl",
    "EMBL",
    "ENSEMBL",
    "entrezgene/locuslink",
    "go",
    "IntAct",
    "pdbe",
    "psi-mi",
    "pubmed",
    "reactome",
    "refseq",
    "uniprotkb",
];

/// One row of the secondary-identifier table.
struct FallbackResolver {
    database: &'static str,
    pattern: Regex,
    /// Capture group holding the identifier; `0` keeps the whole string.
    group: usize,
}

impl FallbackResolver {
    fn new(database: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            database,
            pattern: Regex::new(pattern).expect("fallback resolver pattern must compile"),
            group,
        }
    }

    fn resolve(&self, candidate: &str) -> Option<CrossReference> {
        let captures = self.pattern.captures(candidate)?;
        let identifier = captures.get(self.group)?.as_str();
        Some(CrossReference::new(self.database, identifier))
    }
}

/// Evaluated in order; the first full-string match wins.
static FALLBACK_RESOLVERS: LazyLock<[FallbackResolver; 2]> = LazyLock::new(|| {
    [
        FallbackResolver::new("entrezgene/locuslink", r"^EntrezGene:([0-9]+)$", 1),
        FallbackResolver::new("ENSEMBL", r"^ENSG[0-9]+$", 0),
    ]
});

/// Resolves the whitelisted cross-references of `entity`.
///
/// The result always starts with `reactome:<st_id>`, keeps the order in which
/// candidates were found and is not deduplicated.
///
/// # Examples
///
/// ```
/// use interaction_exporter::{CrossReference, PhysicalEntity, ReferenceEntity, resolve_identifiers};
///
/// let reference = ReferenceEntity::new("uniprotkb", "P04637")
///     .with_other_identifier("EntrezGene:7157")
///     .with_other_identifier("TP53_HUMAN");
/// let tp53 = PhysicalEntity::accessioned("R-HSA-69488", Some(reference));
///
/// assert_eq!(
///     resolve_identifiers(&tp53),
///     [
///         CrossReference::reactome("R-HSA-69488"),
///         CrossReference::new("uniprotkb", "P04637"),
///         CrossReference::new("entrezgene/locuslink", "7157"),
///     ]
/// );
/// ```
pub fn resolve_identifiers(entity: &PhysicalEntity) -> Vec<CrossReference> {
    let mut candidates = vec![CrossReference::reactome(&entity.st_id)];
    candidates.extend(entity.cross_references.iter().map(strip_description));

    if let Some(reference) = entity.reference_entity() {
        collect_reference_identifiers(reference, &mut candidates);
    }

    retain_recognized(candidates)
}

fn collect_reference_identifiers(reference: &ReferenceEntity, out: &mut Vec<CrossReference>) {
    out.push(CrossReference::new(
        &reference.database_name,
        reference.effective_identifier(),
    ));
    out.extend(reference.cross_references.iter().map(strip_description));
    out.extend(
        reference
            .other_identifiers
            .iter()
            .filter_map(|other| resolve_other_identifier(other)),
    );
}

/// Runs a free-form secondary identifier through the fallback table.
pub fn resolve_other_identifier(candidate: &str) -> Option<CrossReference> {
    let resolved = FALLBACK_RESOLVERS
        .iter()
        .find_map(|resolver| resolver.resolve(candidate));
    if resolved.is_none() {
        trace!(identifier = candidate, "no resolver matched secondary identifier");
    }
    resolved
}

#[inline]
pub fn is_recognized_database(database: &str) -> bool {
    RECOGNIZED_DATABASES.contains(&database)
}

fn retain_recognized(candidates: Vec<CrossReference>) -> Vec<CrossReference> {
    candidates
        .into_iter()
        .filter(|xref| {
            let keep = is_recognized_database(&xref.database);
            if !keep {
                trace!(database = %xref.database, identifier = %xref.identifier, "dropping unrecognised database");
            }
            keep
        })
        .collect()
}

fn strip_description(xref: &CrossReference) -> CrossReference {
    CrossReference::new(&xref.database, &xref.identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::SetKind;

    fn ewas(reference: ReferenceEntity) -> PhysicalEntity {
        PhysicalEntity::accessioned("R-HSA-193948", Some(reference))
    }

    #[test]
    fn canonical_reference_comes_first() {
        let entities = [
            PhysicalEntity::simple("R-ALL-113560", None),
            ewas(ReferenceEntity::new("uniprotkb", "Q9Y6K9")),
            PhysicalEntity::complex("R-HSA-3318420", ["R-HSA-3318407"]),
            PhysicalEntity::set("R-HSA-4549252", SetKind::Defined, ["R-HSA-181902"]),
        ];

        for entity in &entities {
            let ids = resolve_identifiers(entity);
            assert_eq!(ids[0], CrossReference::reactome(&entity.st_id));
            assert_eq!(ids.iter().filter(|x| x.is_reactome()).count(), 1);
        }
    }

    #[test]
    fn collects_in_documented_order() {
        let reference = ReferenceEntity::new("uniprotkb", "Q9Y6K9")
            .with_cross_reference(CrossReference::new("refseq", "NP_003630"))
            .with_other_identifier("ENSG00000269335");
        let entity = ewas(reference).with_cross_reference(CrossReference::new("go", "GO:0005829"));

        let ids = resolve_identifiers(&entity);
        assert_eq!(
            ids,
            [
                CrossReference::reactome("R-HSA-193948"),
                CrossReference::new("go", "GO:0005829"),
                CrossReference::new("uniprotkb", "Q9Y6K9"),
                CrossReference::new("refseq", "NP_003630"),
                CrossReference::new("ENSEMBL", "ENSG00000269335"),
            ]
        );
    }

    #[test]
    fn unrecognized_databases_are_dropped() {
        let reference = ReferenceEntity::new("UniProt", "Q9Y6K9")
            .with_cross_reference(CrossReference::new("KEGG Gene", "hsa:8517"))
            .with_cross_reference(CrossReference::new("refseq", "NP_003630"));
        let entity = ewas(reference)
            .with_cross_reference(CrossReference::new("chebi", "15422"))
            .with_cross_reference(CrossReference::new("ChEBI", "15422"));

        let ids = resolve_identifiers(&entity);
        assert!(ids.iter().all(|x| is_recognized_database(&x.database)));
        assert_eq!(
            ids,
            [
                CrossReference::reactome("R-HSA-193948"),
                CrossReference::new("ChEBI", "15422"),
                CrossReference::new("refseq", "NP_003630"),
            ]
        );
    }

    #[test]
    fn isoform_variant_takes_precedence() {
        let reference = ReferenceEntity::new("uniprotkb", "P04637").with_variant("P04637-2");
        let ids = resolve_identifiers(&ewas(reference));

        assert!(ids.contains(&CrossReference::new("uniprotkb", "P04637-2")));
        assert!(!ids.contains(&CrossReference::new("uniprotkb", "P04637")));
    }

    #[test]
    fn empty_variant_falls_back_to_primary() {
        let reference = ReferenceEntity::new("uniprotkb", "P04637").with_variant("");
        let ids = resolve_identifiers(&ewas(reference));
        assert_eq!(ids[1], CrossReference::new("uniprotkb", "P04637"));
    }

    #[test]
    fn entrez_gene_pattern_is_exact() {
        assert_eq!(
            resolve_other_identifier("EntrezGene:123"),
            Some(CrossReference::new("entrezgene/locuslink", "123"))
        );
        assert_eq!(resolve_other_identifier("EntrezGene:abc"), None);
        assert_eq!(resolve_other_identifier("EntrezGene:"), None);
        assert_eq!(resolve_other_identifier("EntrezGene:123 "), None);
        assert_eq!(resolve_other_identifier("xEntrezGene:123"), None);
    }

    #[test]
    fn ensembl_pattern_is_exact() {
        assert_eq!(
            resolve_other_identifier("ENSG0000012345"),
            Some(CrossReference::new("ENSEMBL", "ENSG0000012345"))
        );
        assert_eq!(resolve_other_identifier("XENSG0000012345"), None);
        assert_eq!(resolve_other_identifier("ENSG0000012345.4"), None);
        assert_eq!(resolve_other_identifier("ENST00000269305"), None);
    }

    #[test]
    fn digits_are_ascii_only() {
        assert_eq!(resolve_other_identifier("EntrezGene:١٢٣"), None);
        assert_eq!(resolve_other_identifier("ENSG١٢٣"), None);
    }

    #[test]
    fn first_matching_resolver_wins() {
        // Each string yields at most one reference, from the first row that matches.
        let reference = ReferenceEntity::new("uniprotkb", "P04637")
            .with_other_identifier("EntrezGene:7157")
            .with_other_identifier("ENSG00000141510")
            .with_other_identifier("TP53")
            .with_other_identifier("EntrezGene:7157");
        let ids = resolve_identifiers(&ewas(reference));

        assert_eq!(
            ids[2..],
            [
                CrossReference::new("entrezgene/locuslink", "7157"),
                CrossReference::new("ENSEMBL", "ENSG00000141510"),
                CrossReference::new("entrezgene/locuslink", "7157"),
            ]
        );
    }

    #[test]
    fn missing_reference_entity_is_valid() {
        let ids = resolve_identifiers(&PhysicalEntity::simple("R-ALL-113560", None));
        assert_eq!(ids, [CrossReference::reactome("R-ALL-113560")]);
    }

    #[test]
    fn descriptions_are_not_carried() {
        let entity = PhysicalEntity::simple("R-ALL-113560", None).with_cross_reference(
            CrossReference::new("ChEBI", "30616").with_description("ATP(4-)"),
        );
        let ids = resolve_identifiers(&entity);
        assert!(ids.iter().all(|x| x.description.is_none()));
    }
}
