use dictach_types::{Description, DescriptionId, Dictionary, Word, WordSummary};

use crate::error::FetchError;

/// What the presentation layer draws for a screen
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<V> {
    /// Spinner; `error` is set when the initial fetch failed
    Loading { error: Option<FetchError> },
    /// Data view with the refresh control bound to `refreshing`
    Content {
        body: V,
        refreshing: bool,
        error: Option<FetchError>,
    },
}

impl<V> ScreenView<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenView::Loading { .. })
    }

    pub fn body(&self) -> Option<&V> {
        match self {
            ScreenView::Content { body, .. } => Some(body),
            ScreenView::Loading { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryView {
    pub language: String,
    pub letters: Vec<LetterGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    pub letter: String,
    pub words: Vec<WordSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordView {
    pub descriptions: Vec<DescriptionRow>,
    /// Placeholder text, set only when there are no descriptions
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    pub index: usize,
    pub id: DescriptionId,
    pub text: String,
}

impl DictionaryView {
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self {
            language: dictionary.language.clone(),
            letters: group_by_alphabet(&dictionary.alphabeth, &dictionary.words),
        }
    }
}

impl WordView {
    pub fn from_word(word: &Word, empty_message: &str) -> Self {
        let descriptions: Vec<DescriptionRow> = word
            .descriptions
            .iter()
            .enumerate()
            .map(|(index, Description { id, text })| DescriptionRow {
                index,
                id: *id,
                text: text.clone(),
            })
            .collect();

        let empty_message = descriptions
            .is_empty()
            .then(|| empty_message.to_string());

        Self {
            descriptions,
            empty_message,
        }
    }
}

/// One group per distinct letter, in alphabet order.
///
/// A word goes under the longest letter its title starts with (so "ch"
/// wins over "c"). Words matching no letter are not listed.
pub fn group_by_alphabet(alphabeth: &[String], words: &[WordSummary]) -> Vec<LetterGroup> {
    let mut groups: Vec<LetterGroup> = Vec::with_capacity(alphabeth.len());
    for letter in alphabeth {
        if letter.is_empty() || groups.iter().any(|g| g.letter == *letter) {
            continue;
        }
        groups.push(LetterGroup {
            letter: letter.clone(),
            words: Vec::new(),
        });
    }

    for word in words {
        let title = word.title.to_lowercase();
        let best = groups
            .iter_mut()
            .filter(|g| title.starts_with(&g.letter.to_lowercase()))
            .max_by_key(|g| g.letter.chars().count());

        if let Some(group) = best {
            group.words.push(word.clone());
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use dictach_types::WordId;

    use super::*;

    fn letters(list: &[&str]) -> Vec<String> {
        list.iter().map(|l| l.to_string()).collect()
    }

    fn summary(id: u64, title: &str) -> WordSummary {
        WordSummary {
            id: WordId(id),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_groups_follow_alphabet_exactly() {
        let groups = group_by_alphabet(&letters(&["a", "b"]), &[]);
        let names: Vec<&str> = groups.iter().map(|g| g.letter.as_str()).collect();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_letters_collapse() {
        let groups = group_by_alphabet(&letters(&["a", "b", "a"]), &[]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_longest_letter_wins() {
        let words = [summary(1, "Chico"), summary(2, "Casa"), summary(3, "zorro")];
        let groups = group_by_alphabet(&letters(&["c", "ch"]), &words);

        assert_eq!(groups[0].words, vec![summary(2, "Casa")]);
        assert_eq!(groups[1].words, vec![summary(1, "Chico")]);
    }

    #[test]
    fn test_empty_descriptions_show_placeholder() {
        let word = Word {
            id: WordId(1),
            dictionary_id: Default::default(),
            title: "Hola".to_string(),
            descriptions: vec![],
        };

        let view = WordView::from_word(&word, "nothing here");
        assert_eq!(view.empty_message.as_deref(), Some("nothing here"));
    }
}
