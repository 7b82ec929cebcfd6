use huffman_encoder::{
    CodeTable, FrequencyTable, HuffmanCoder, HuffmanError, HuffmanTree, Statistics, TreeElement,
    build_code,
};

fn code_lengths(codes: &CodeTable<char>) -> Vec<usize> {
    let mut lengths: Vec<usize> = codes.iter().map(|(_, cw)| cw.len()).collect();
    lengths.sort();
    lengths
}

#[test]
fn test_skewed_three_symbol_scenario() {
    let freq = FrequencyTable::from_text("aaabbbcc");
    assert_eq!(freq.get(&'a'), Some(3));
    assert_eq!(freq.get(&'b'), Some(3));
    assert_eq!(freq.get(&'c'), Some(2));

    let (codes, _) = build_code(&freq).expect("three symbols are enough");
    assert_eq!(code_lengths(&codes), vec![1, 2, 2]);

    let stats = Statistics::compute(&freq, &codes).expect("tables match");
    assert!((stats.expected_length() - 1.625).abs() < 1e-9);
    assert!((stats.entropy() - 1.561).abs() < 1e-3);
    assert!(stats.expected_length() >= stats.entropy());
}

#[test]
fn test_equiprobable_scenario() {
    let freq = FrequencyTable::from_text("abcabcabc");
    let (codes, _) = build_code(&freq).unwrap();
    // Three leaves in a binary tree: one short and two long codewords.
    assert_eq!(code_lengths(&codes), vec![1, 2, 2]);

    let stats = Statistics::compute(&freq, &codes).unwrap();
    assert!((stats.entropy() - 1.585).abs() < 1e-3);
    assert!((stats.expected_length() - 5.0 / 3.0).abs() < 1e-9);
    assert!(stats.expected_length() >= stats.entropy());
}

#[test]
fn test_small_alphabets_rejected() {
    for text in ["aa", "ab", "", "a"] {
        let freq = FrequencyTable::from_text(text);
        match build_code(&freq) {
            Err(HuffmanError::InsufficientAlphabet { distinct, required }) => {
                assert_eq!(distinct, freq.distinct());
                assert_eq!(required, 3);
            }
            other => panic!("expected InsufficientAlphabet for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_error_message() {
    let err = HuffmanCoder::new().encode_text("ab").unwrap_err();
    assert_eq!(
        err.to_string(),
        "not enough unique symbols: found 2, need at least 3"
    );
}

#[test]
fn test_space_gets_a_regular_codeword() {
    let with_space = FrequencyTable::from_text("aa bb  ");
    let with_x = FrequencyTable::from_text("aaxbbxx");
    let (space_codes, _) = build_code(&with_space).unwrap();
    let (x_codes, _) = build_code(&with_x).unwrap();

    // ' ' and 'x' both have weight 3 and are the heaviest symbol.
    assert_eq!(space_codes.get(&' ').map(|c| c.len()), x_codes.get(&'x').map(|c| c.len()));
}

#[test]
fn test_control_characters() {
    let text = "line one\nline two\n\tindented\r\n";
    let encoding = HuffmanCoder::new().encode_text(text).unwrap();
    let input: Vec<char> = text.chars().collect();
    let bits = encoding.encode_input(&input).unwrap();
    assert_eq!(encoding.codes().decode(&bits).unwrap(), input);
}

#[test]
fn test_single_dominant_symbol() {
    let mut text = "a".repeat(100_000);
    text.push_str("bcd");
    let stats = HuffmanCoder::new()
        .encode_text(&text)
        .unwrap()
        .statistics()
        .unwrap();
    assert_eq!(stats.rows()[0].symbol, 'a');
    assert_eq!(stats.rows()[0].codeword.len(), 1);
    assert!(stats.expected_length() < 1.001);
    assert!(stats.entropy() < stats.expected_length());
}

#[test]
fn test_tree_shape_for_renderers() {
    let encoding = HuffmanCoder::new().encode_text("aaaabbbccd").unwrap();
    let elements = encoding.elements();

    let leaves = elements
        .iter()
        .filter(|e| matches!(e, TreeElement::Leaf { .. }))
        .count();
    let merges = elements
        .iter()
        .filter(|e| matches!(e, TreeElement::Merge(_)))
        .count();
    assert_eq!(leaves, 4);
    assert_eq!(merges, 2);

    // Every element hangs off another element or off the root.
    for element in &elements {
        let parent = element.path().parent().expect("non-root elements have a parent");
        assert!(parent.is_empty() || elements.iter().any(|e| e.path() == &parent));
    }
    assert_eq!(encoding.tree().total_weight(), 10);
}

#[test]
fn test_reconstruction_agrees_with_tree() {
    let freq = FrequencyTable::from_text("the quick brown fox jumps over the lazy dog");
    let tree = HuffmanTree::build(&freq).unwrap();
    let codes = CodeTable::from_tree(&tree);
    assert_eq!(codes.reconstruct_merges(&freq).unwrap(), tree.merge_nodes());
}

#[test]
fn test_report_is_reproducible() {
    let first = HuffmanCoder::new().encode_text("she sells sea shells").unwrap();
    let second = HuffmanCoder::new().encode_text("she sells sea shells").unwrap();
    assert_eq!(
        first.statistics().unwrap().to_string(),
        second.statistics().unwrap().to_string()
    );
}
