//! Canonicalización de SMILES moleculares y de reacción.
//!
//! La forma canónica de una molécula multi-fragmento ordena los fragmentos
//! lexicográficamente, de modo que `CCO.CCN` y `CCN.CCO` produzcan la misma
//! cadena. Para reacciones, la cadena se separa en los tres grupos
//! `reactivos>agentes>productos` y cada grupo se canonicaliza por separado.

use crate::CanonError;

/// Símbolos permitidos en un SMILES además de alfanuméricos.
const ALLOWED_SYMBOLS: &str = "()[]=#$+-./\\@%:*~";

fn check_balance(raw: &str, open: char, close: char) -> Result<(), CanonError> {
    let mut depth: i32 = 0;
    for ch in raw.chars() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth < 0 {
                return Err(CanonError::Unbalanced(close));
            }
        }
    }
    if depth != 0 {
        return Err(CanonError::Unbalanced(open));
    }
    Ok(())
}

fn validate(raw: &str) -> Result<(), CanonError> {
    for (pos, ch) in raw.char_indices() {
        if !ch.is_ascii_alphanumeric() && !ALLOWED_SYMBOLS.contains(ch) {
            return Err(CanonError::InvalidCharacter { ch, pos });
        }
    }
    check_balance(raw, '(', ')')?;
    check_balance(raw, '[', ']')?;
    Ok(())
}

/// Devuelve la forma canónica de un SMILES molecular.
///
/// Valida el alfabeto y el balance de paréntesis/corchetes, separa los
/// fragmentos por `.` y los reordena lexicográficamente.
pub fn canonical_smiles(raw: &str) -> Result<String, CanonError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CanonError::EmptyInput);
    }
    validate(trimmed)?;
    let mut fragments: Vec<&str> = trimmed.split('.').collect();
    if fragments.iter().any(|f| f.is_empty()) {
        return Err(CanonError::EmptyFragment);
    }
    fragments.sort_unstable();
    Ok(fragments.join("."))
}

/// Grupos de una reacción separados por rol, cada fragmento ya canónico.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionParts {
    pub reactants: Vec<String>,
    pub reagents: Vec<String>,
    pub products: Vec<String>,
}

impl ReactionParts {
    /// Separa `reactivos>agentes>productos` y canonicaliza cada fragmento.
    /// El grupo de agentes puede estar vacío (`a>>b`); reactivos y
    /// productos necesitan al menos un fragmento.
    pub fn parse(raw: &str) -> Result<Self, CanonError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CanonError::EmptyInput);
        }
        let groups: Vec<&str> = trimmed.split('>').collect();
        if groups.len() != 3 {
            return Err(CanonError::MalformedReaction(format!(
                "expected 'reactants>reagents>products', found {} group(s)",
                groups.len()
            )));
        }
        let reactants = split_group(groups[0])?;
        let reagents = split_group(groups[1])?;
        let products = split_group(groups[2])?;
        if reactants.is_empty() {
            return Err(CanonError::MalformedReaction("missing reactants".to_string()));
        }
        if products.is_empty() {
            return Err(CanonError::MalformedReaction("missing products".to_string()));
        }
        Ok(ReactionParts { reactants, reagents, products })
    }

    /// Reensambla la forma `reactivos>agentes>productos`. Con agentes
    /// vacíos se obtiene la forma corta `a>>b`.
    pub fn to_reaction_smiles(&self) -> String {
        format!(
            "{}>{}>{}",
            self.reactants.join("."),
            self.reagents.join("."),
            self.products.join(".")
        )
    }
}

fn split_group(group: &str) -> Result<Vec<String>, CanonError> {
    if group.is_empty() {
        return Ok(Vec::new());
    }
    group.split('.').map(canonical_smiles).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_reordered() {
        assert_eq!(canonical_smiles("CCO.CCN").unwrap(), "CCN.CCO");
        assert_eq!(canonical_smiles("CCN.CCO").unwrap(), "CCN.CCO");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(canonical_smiles("  CCO ").unwrap(), "CCO");
    }

    #[test]
    fn invalid_character_is_rejected() {
        let err = canonical_smiles("CC?O").unwrap_err();
        assert_eq!(err, CanonError::InvalidCharacter { ch: '?', pos: 2 });
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        assert_eq!(canonical_smiles("CC(=O").unwrap_err(), CanonError::Unbalanced('('));
        assert_eq!(canonical_smiles("CC)O").unwrap_err(), CanonError::Unbalanced(')'));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(canonical_smiles("   ").unwrap_err(), CanonError::EmptyInput);
        assert_eq!(canonical_smiles("CC..O").unwrap_err(), CanonError::EmptyFragment);
    }

    #[test]
    fn reaction_roundtrip_without_reagents() {
        let parts = ReactionParts::parse("CCN>>CCC(=O)NCC").unwrap();
        assert!(parts.reagents.is_empty());
        assert_eq!(parts.to_reaction_smiles(), "CCN>>CCC(=O)NCC");
    }

    #[test]
    fn reaction_groups_are_split_by_role() {
        let parts = ReactionParts::parse("CCC(=O)O.CCN>C1CCOC1>CCC(=O)NCC").unwrap();
        assert_eq!(parts.reactants, vec!["CCC(=O)O", "CCN"]);
        assert_eq!(parts.reagents, vec!["C1CCOC1"]);
        assert_eq!(parts.products, vec!["CCC(=O)NCC"]);
    }

    #[test]
    fn malformed_reactions_are_rejected() {
        assert!(matches!(
            ReactionParts::parse("CCN>CCO").unwrap_err(),
            CanonError::MalformedReaction(_)
        ));
        assert!(matches!(
            ReactionParts::parse(">>CCO").unwrap_err(),
            CanonError::MalformedReaction(_)
        ));
        assert!(matches!(
            ReactionParts::parse("CCN>>").unwrap_err(),
            CanonError::MalformedReaction(_)
        ));
    }
}
