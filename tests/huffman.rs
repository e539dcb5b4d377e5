use huffcode::compression::huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, huffman_decode, EncodedResult,
    HuffmanCoder, HuffmanConfig, HuffmanNode, Symbol,
};
use huffcode::HuffmanError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn leaf(symbol: char) -> HuffmanNode {
    HuffmanNode::Leaf {
        symbol: symbol as u32,
        weight: 1,
    }
}

fn random_symbols(rng: &mut StdRng, alphabet_size: u32) -> Vec<Symbol> {
    let len = rng.gen_range(1..500);
    // Skew towards small symbols so frequencies differ.
    let spread = rng.gen_range(1..=alphabet_size);
    (0..len).map(|_| rng.gen_range(0..spread)).collect()
}

#[test]
fn test_round_trip_text() {
    let coder = HuffmanCoder::unicode();
    let encoded = coder.compress_str("abcdeffgg").unwrap();
    assert_eq!(coder.decompress_str(&encoded).unwrap(), "abcdeffgg");
}

#[test]
fn test_single_distinct_symbol() {
    let coder = HuffmanCoder::unicode();
    let encoded = coder.compress_str("aaaa").unwrap();
    let leaves = encoded.tree.leaves();
    assert_eq!(leaves.len(), 2);
    assert!(leaves.contains(&('a' as u32, 4)));
    assert!(leaves.contains(&(coder.config().sentinel(), 0)));
    assert_eq!(coder.decompress_str(&encoded).unwrap(), "aaaa");
}

#[test]
fn test_equal_frequencies_are_deterministic() {
    let coder = HuffmanCoder::unicode();
    let first = coder.compress_str("ab").unwrap();
    for _ in 0..10 {
        assert_eq!(coder.compress_str("ab").unwrap(), first);
    }
    assert_eq!(first.bits, "01");
}

#[test]
fn test_truncated_bits() {
    // a=0, b=10, c=11: a trailing "1" stops inside the right subtree.
    let tree = HuffmanNode::merge(leaf('a'), HuffmanNode::merge(leaf('b'), leaf('c')));
    let result = EncodedResult::new("0101".to_string(), tree, HuffmanConfig::unicode());
    assert_eq!(
        HuffmanCoder::unicode().decompress(&result),
        Err(HuffmanError::IncompleteCode { position: 4 })
    );
}

#[test]
fn test_non_binary_character() {
    let tree = HuffmanNode::merge(leaf('a'), leaf('b'));
    let result = EncodedResult::new("012".to_string(), tree, HuffmanConfig::unicode());
    assert_eq!(
        HuffmanCoder::unicode().decompress(&result),
        Err(HuffmanError::InvalidBit {
            bit: '2',
            position: 2
        })
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(
        HuffmanCoder::bytes().compress_bytes(&[]),
        Err(HuffmanError::EmptyInput)
    );
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for alphabet_size in [2, 3, 16, 256, 1000] {
        let coder = HuffmanCoder::new(HuffmanConfig::new(alphabet_size)).unwrap();
        for _ in 0..20 {
            let symbols = random_symbols(&mut rng, alphabet_size);
            let encoded = coder.compress(&symbols).unwrap();
            assert_eq!(coder.decompress(&encoded).unwrap(), symbols);
        }
    }
}

#[test]
fn test_random_code_tables_are_prefix_free_and_non_empty() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = HuffmanConfig::bytes();
    for _ in 0..50 {
        let symbols = random_symbols(&mut rng, config.alphabet_size);
        let freq = build_frequency_table(&symbols, &config).unwrap();
        let tree = build_huffman_tree(&freq, &config).unwrap();
        let table = build_code_table(&tree, &config);
        assert_eq!(table.len(), freq.len());
        assert!(table.is_prefix_free());
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }
}

#[test]
fn test_compression_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let coder = HuffmanCoder::bytes();
    for _ in 0..20 {
        let data: Vec<u8> = (0..rng.gen_range(1..300)).map(|_| rng.gen()).collect();
        assert_eq!(
            coder.compress_bytes(&data).unwrap(),
            coder.compress_bytes(&data).unwrap()
        );
    }
}

#[test]
fn test_skewed_tree_round_trip() {
    // Fibonacci weights give a maximally skewed tree.
    let mut symbols = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u32 {
        symbols.extend(std::iter::repeat(symbol).take(a));
        (a, b) = (b, a + b);
    }
    let coder = HuffmanCoder::bytes();
    let encoded = coder.compress(&symbols).unwrap();
    assert_eq!(encoded.tree.depth(), 19);
    assert_eq!(coder.decompress(&encoded).unwrap(), symbols);
}

#[test]
fn test_packed_payload_round_trip() {
    let coder = HuffmanCoder::bytes();
    let data = b"the quick brown fox jumps over the lazy dog";
    let encoded = coder.compress_bytes(data).unwrap();
    let packed = encoded.to_bitvec().unwrap();
    assert_eq!(packed.len(), encoded.bit_len());
    assert_eq!(packed.as_raw_slice().len(), encoded.bit_len().div_ceil(8));

    let restored = EncodedResult::from_bitvec(&packed, encoded.tree.clone(), encoded.config);
    assert_eq!(coder.decompress_bytes(&restored).unwrap(), data);
}

#[test]
fn test_stats_report_savings() {
    let coder = HuffmanCoder::bytes();
    let data = b"aaaaaaaabbbbccd";
    let encoded = coder.compress_bytes(data).unwrap();
    let stats = encoded.stats();
    assert_eq!(stats.symbol_count, data.len());
    assert_eq!(stats.original_bits, data.len() * 8);
    assert_eq!(stats.encoded_bits, encoded.bit_len());
    assert!(stats.space_savings() > 50.0);
}

#[test]
fn test_result_decodes_with_any_coder() {
    let encoded = HuffmanCoder::unicode().compress_str("ħh").unwrap();
    let expected = vec![0x127, 'h' as u32];
    assert_eq!(HuffmanCoder::bytes().decompress(&encoded).unwrap(), expected);
    assert_eq!(HuffmanCoder::unicode().decompress(&encoded).unwrap(), expected);
    assert_eq!(
        HuffmanCoder::bytes().decompress_bytes(&encoded),
        Err(HuffmanError::SymbolOutOfRange { symbol: 0x127 })
    );
}

#[test]
fn test_placeholder_leaf_never_decodes_as_data() {
    let mut encoded = HuffmanCoder::bytes().compress_bytes(b"aaaa").unwrap();
    // The placeholder takes the '0' branch.
    encoded.bits = "0".to_string();
    assert_eq!(
        huffman_decode(&encoded),
        Err(HuffmanError::SentinelReached { position: 1 })
    );
    assert_eq!(
        HuffmanCoder::unicode().decompress(&encoded),
        Err(HuffmanError::SentinelReached { position: 1 })
    );
}
