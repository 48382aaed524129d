use okiya::{Card, ParseCardError, Rank, Suit};

#[test]
fn encode_decode_round_trips_all_combinations() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(suit, rank);
            assert_eq!(card.suit(), suit);
            assert_eq!(card.rank(), rank);
        }
    }
}

#[test]
fn card_indices_are_bijective() {
    let mut seen = [false; 16];
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let idx = Card::new(suit, rank).index();
            assert!(idx < 16);
            assert!(!seen[idx as usize], "index {idx} produced twice");
            seen[idx as usize] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn format_parse_round_trips_all_cards() {
    for idx in 0..16 {
        let card = Card::from_index(idx).expect("valid index");
        let notation = card.to_string();
        assert_eq!(notation.chars().count(), 2);
        let parsed: Card = notation.parse().expect("parse formatted card");
        assert_eq!(parsed, card);
    }
}

#[test]
fn parse_accepts_ascii_letter_fallback() {
    assert_eq!(
        "KH".parse::<Card>().unwrap(),
        Card::new(Suit::Hearts, Rank::King)
    );
    assert_eq!(
        "jc".parse::<Card>().unwrap(),
        Card::new(Suit::Clubs, Rank::Jack)
    );
    assert_eq!(
        "aS".parse::<Card>().unwrap(),
        Card::new(Suit::Spades, Rank::Ace)
    );
    assert_eq!("QD".parse::<Card>(), "Q\u{2666}".parse::<Card>());
}

#[test]
fn parse_rejects_malformed_input() {
    assert_eq!(
        "K".parse::<Card>(),
        Err(ParseCardError::Length("K".to_owned()))
    );
    assert_eq!(
        "K\u{2665}x".parse::<Card>(),
        Err(ParseCardError::Length("K\u{2665}x".to_owned()))
    );
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Length(String::new())));
    assert_eq!("XH".parse::<Card>(), Err(ParseCardError::Rank('X')));
    assert_eq!("KZ".parse::<Card>(), Err(ParseCardError::Suit('Z')));
}

#[test]
fn try_parse_is_the_non_throwing_twin() {
    assert_eq!(
        Card::try_parse("A\u{2660}"),
        Some(Card::new(Suit::Spades, Rank::Ace))
    );
    assert_eq!(Card::try_parse("??"), None);
    assert_eq!(Card::try_parse(""), None);
}

#[test]
fn from_index_rejects_out_of_range() {
    assert!(Card::from_index(15).is_some());
    assert!(Card::from_index(16).is_none());
    assert!(Card::from_index(255).is_none());
}

#[test]
fn matches_shares_rank_or_suit() {
    let kh = Card::new(Suit::Hearts, Rank::King);
    assert!(kh.matches(Card::new(Suit::Hearts, Rank::Jack)), "same suit");
    assert!(kh.matches(Card::new(Suit::Clubs, Rank::King)), "same rank");
    assert!(kh.matches(kh), "a card matches itself");
    assert!(!kh.matches(Card::new(Suit::Clubs, Rank::Jack)));
}
