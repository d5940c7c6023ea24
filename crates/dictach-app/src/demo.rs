use std::collections::BTreeSet;

use dictach_store::{MemoryStore, StoreError};
use dictach_types::{Description, DescriptionId, Dictionary, DictionaryId, Word, WordId};

/// In-memory store with one Spanish dictionary, for trying the screens offline
pub async fn seeded_store() -> Result<MemoryStore, StoreError> {
    let store = MemoryStore::new();
    let dictionary_id = DictionaryId(1);

    store
        .insert_dictionary(Dictionary {
            id: dictionary_id,
            title: "Spanish".to_string(),
            language: "Spanish".to_string(),
            alphabeth: ["a", "b", "c", "ch", "h", "l", "ll"]
                .into_iter()
                .map(String::from)
                .collect(),
            tags: BTreeSet::from(["basics".to_string()]),
            words: vec![],
        })
        .await;

    let words = [
        (1, "Amigo", vec!["friend"]),
        (2, "Hola", vec!["hello", "hi"]),
        (3, "Chico", vec!["boy", "small"]),
        (4, "Llave", vec![]),
    ];

    for (id, title, descriptions) in words {
        store
            .insert_word(Word {
                id: WordId(id),
                dictionary_id,
                title: title.to_string(),
                descriptions: descriptions
                    .into_iter()
                    .zip(1..)
                    .map(|(text, id)| Description {
                        id: DescriptionId(id),
                        text: text.to_string(),
                    })
                    .collect(),
            })
            .await?;
    }

    Ok(store)
}
