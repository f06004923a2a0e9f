// Declarative romaji -> katakana correspondence table.
//
// Each row maps every listed input spelling to every listed katakana output
// (a cross product) on a path from `from` to `to`. An empty string stands for
// the null symbol on that side.

use super::{Correspondence, Gate, Node, Vowel};

use Gate::{B, G, K, P, S, T};
use Node::{Geminate, Labial, Long, Nasal, SmallY, Start};
use Vowel::{A, E, I, O, U};

/// Consume or emit nothing.
const NULL: &[&str] = &[""];

/// Ways a long vowel is marked: Hepburn macron, Kunrei/Nihon circumflex,
/// passport-Hepburn `h`, or not at all.
const LENGTH_MARKS: &[&str] = &["\u{0304}", "\u{0302}", "h", ""];

const fn row(
    from: Node,
    inputs: &'static [&'static str],
    outputs: &'static [&'static str],
    to: Node,
) -> Correspondence {
    Correspondence {
        from,
        inputs,
        outputs,
        to,
    }
}

pub(crate) const CORRESPONDENCES: &[Correspondence] = &[
    // -- End of input --
    row(Start, &["$"], NULL, Node::Accept),
    // -- Long vowels: an optional extension, identical for every marking --
    row(Long(U), LENGTH_MARKS, &["ウ"], Start),
    row(Long(U), NULL, NULL, Start),
    row(Long(I), LENGTH_MARKS, &["イ"], Start),
    row(Long(I), NULL, NULL, Start),
    row(Long(E), LENGTH_MARKS, &["エ"], Start),
    row(Long(E), NULL, NULL, Start),
    row(Long(O), LENGTH_MARKS, &["オ", "ウ"], Start),
    row(Long(O), NULL, NULL, Start),
    row(Long(A), LENGTH_MARKS, &["ア"], Start),
    row(Long(A), NULL, NULL, Start),
    // -- Palatalized vowels after a y-onset --
    row(SmallY, &["a"], &["ャ"], Long(A)),
    row(SmallY, &["u"], &["ュ"], Long(U)),
    row(SmallY, &["o"], &["ョ"], Long(O)),
    // -- Bare vowels --
    row(Start, &["u"], &["ウ"], Long(U)),
    row(Start, &["o"], &["オ", "ヲ"], Long(O)),
    row(Start, &["a"], &["ア"], Long(A)),
    row(Start, &["i"], &["イ"], Long(I)),
    row(Start, &["e"], &["エ"], Long(E)),
    row(Start, &["wo"], &["ヲ"], Long(O)),
    // -- s / sh / z / j --
    row(Start, &["s", "j", "z"], &["ッ"], Geminate(S)),
    row(Start, NULL, NULL, Geminate(S)),
    row(Geminate(S), &["sh", "sy"], &["シ"], SmallY),
    row(Geminate(S), &["j", "zy"], &["ジ", "ヂ"], SmallY),
    row(Geminate(S), &["si", "shi"], &["シ"], Long(I)),
    row(Geminate(S), &["sa"], &["サ"], Long(A)),
    row(Geminate(S), &["se"], &["セ"], Long(E)),
    row(Geminate(S), &["so"], &["ソ"], Long(O)),
    row(Geminate(S), &["su"], &["ス"], Long(U)),
    row(Geminate(S), &["zi", "ji"], &["ジ", "ヂ"], Long(I)),
    row(Geminate(S), &["za"], &["ザ"], Long(A)),
    row(Geminate(S), &["ze"], &["ゼ"], Long(E)),
    row(Geminate(S), &["zo"], &["ゾ"], Long(O)),
    row(Geminate(S), &["zu"], &["ズ", "ヅ"], Long(U)),
    // -- t / d / ch (one gemination gate, so "tchi" and "cchi" both give ッチ) --
    row(Start, &["c", "t", "d"], &["ッ"], Geminate(T)),
    row(Start, NULL, NULL, Geminate(T)),
    row(Geminate(T), &["ch", "ty"], &["チ"], SmallY),
    row(Geminate(T), &["dy"], &["ヂ"], SmallY),
    row(Geminate(T), &["ti", "chi"], &["チ"], Long(I)),
    row(Geminate(T), &["ta"], &["タ"], Long(A)),
    row(Geminate(T), &["te"], &["テ"], Long(E)),
    row(Geminate(T), &["to"], &["ト"], Long(O)),
    row(Geminate(T), &["tsu", "tu"], &["ツ"], Long(U)),
    row(Geminate(T), &["di"], &["ヂ"], Long(I)),
    row(Geminate(T), &["da"], &["ダ"], Long(A)),
    row(Geminate(T), &["de"], &["デ"], Long(E)),
    row(Geminate(T), &["do"], &["ド"], Long(O)),
    row(Geminate(T), &["du", "dzu"], &["ヅ"], Long(U)),
    // -- n: syllable onset or moraic nasal --
    row(Start, &["n"], NULL, Nasal),
    // wapuro "nn", Kunrei/Nihon apostrophe, Hepburn hyphen, or omitted
    row(Nasal, &["n", "'", "-", ""], &["ン"], Start),
    row(Nasal, &["i"], &["ニ"], Long(I)),
    row(Nasal, &["e"], &["ネ"], Long(E)),
    row(Nasal, &["o"], &["ノ"], Long(O)),
    row(Nasal, &["a"], &["ナ"], Long(A)),
    row(Nasal, &["u"], &["ヌ"], Long(U)),
    row(Nasal, &["y"], &["ニ"], SmallY),
    // -- k / g --
    row(Start, &["k"], &["ッ"], Geminate(K)),
    row(Start, NULL, NULL, Geminate(K)),
    row(Geminate(K), &["ki"], &["キ"], Long(I)),
    row(Geminate(K), &["ke"], &["ケ"], Long(E)),
    row(Geminate(K), &["ko"], &["コ"], Long(O)),
    row(Geminate(K), &["ka"], &["カ"], Long(A)),
    row(Geminate(K), &["ku"], &["ク"], Long(U)),
    row(Geminate(K), &["ky"], &["キ"], SmallY),
    row(Start, &["g"], &["ッ"], Geminate(G)),
    row(Start, NULL, NULL, Geminate(G)),
    row(Geminate(G), &["gi"], &["ギ"], Long(I)),
    row(Geminate(G), &["ge"], &["ゲ"], Long(E)),
    row(Geminate(G), &["go"], &["ゴ"], Long(O)),
    row(Geminate(G), &["ga"], &["ガ"], Long(A)),
    row(Geminate(G), &["gu"], &["グ"], Long(U)),
    row(Geminate(G), &["gy"], &["ギ"], SmallY),
    // -- r --
    row(Start, &["ri"], &["リ"], Long(I)),
    row(Start, &["re"], &["レ"], Long(E)),
    row(Start, &["ro"], &["ロ"], Long(O)),
    row(Start, &["ra"], &["ラ"], Long(A)),
    row(Start, &["ru"], &["ル"], Long(U)),
    row(Start, &["ry"], &["リ"], SmallY),
    // -- m --
    row(Start, &["mi"], &["ミ"], Long(I)),
    row(Start, &["me"], &["メ"], Long(E)),
    row(Start, &["mo"], &["モ"], Long(O)),
    row(Start, &["ma"], &["マ"], Long(A)),
    row(Start, &["mu"], &["ム"], Long(U)),
    row(Start, &["my"], &["ミ"], SmallY),
    // -- w --
    row(Start, &["wa"], &["ワ"], Long(A)),
    // -- y --
    row(Start, &["yo"], &["ヨ"], Long(O)),
    row(Start, &["ya"], &["ヤ"], Long(A)),
    row(Start, &["yu"], &["ユ"], Long(U)),
    // -- p / b, optionally after an "m" written for the moraic nasal --
    row(Start, &["m"], &["ン"], Labial),
    row(Start, NULL, NULL, Labial),
    row(Labial, &["p"], &["ッ"], Geminate(P)),
    row(Labial, NULL, NULL, Geminate(P)),
    row(Geminate(P), &["pi"], &["ピ"], Long(I)),
    row(Geminate(P), &["pe"], &["ペ"], Long(E)),
    row(Geminate(P), &["po"], &["ポ"], Long(O)),
    row(Geminate(P), &["pa"], &["パ"], Long(A)),
    row(Geminate(P), &["pu"], &["プ"], Long(U)),
    row(Geminate(P), &["py"], &["ピ"], SmallY),
    row(Labial, &["b"], &["ッ"], Geminate(B)),
    row(Labial, NULL, NULL, Geminate(B)),
    row(Geminate(B), &["bi"], &["ビ"], Long(I)),
    row(Geminate(B), &["be"], &["ベ"], Long(E)),
    row(Geminate(B), &["bo"], &["ボ"], Long(O)),
    row(Geminate(B), &["ba"], &["バ"], Long(A)),
    row(Geminate(B), &["bu"], &["ブ"], Long(U)),
    row(Geminate(B), &["by"], &["ビ"], SmallY),
    // -- h / f --
    row(Start, &["hi"], &["ヒ"], Long(I)),
    row(Start, &["he"], &["ヘ"], Long(E)),
    row(Start, &["ho"], &["ホ"], Long(O)),
    row(Start, &["ha"], &["ハ"], Long(A)),
    row(Start, &["hu", "fu"], &["フ"], Long(U)),
    row(Start, &["hy"], &["ヒ"], SmallY),
];
