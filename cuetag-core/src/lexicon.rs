//! Trigger lexicons
//!
//! Every classifier branch reduces to "does the text contain any of these
//! substrings". Matching is literal: no case folding, no whitespace
//! normalisation, no tokenisation. Entry order is kept as written so dumps
//! of the lexicons are reproducible.

use serde::Serialize;

/// A named, ordered list of trigger substrings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lexicon {
    pub name: &'static str,
    pub entries: &'static [&'static str],
}

impl Lexicon {
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.entries)
    }
}

/// True iff at least one non-empty entry occurs in `text` as a contiguous substring.
pub fn contains_any(text: &str, entries: &[&str]) -> bool {
    entries.iter().any(|e| !e.is_empty() && text.contains(e))
}

// ============================================================================
// Discourse-type cues
// ============================================================================

/// Reported-speech and meeting vocabulary.
pub const CONVERSATIONAL: Lexicon = Lexicon {
    name: "conversational",
    entries: &[
        "말했다", "물었다", "대답했다", "요청한다", "안내한다", "문의", "답변",
        "회의", "회의에서", "발언했다", "라고 했다",
    ],
};

/// Plans, outlooks and hedged possibility. Also feeds the future-tense candidate check.
pub const PREDICTIVE: Lexicon = Lexicon {
    name: "predictive",
    entries: &[
        "예정", "계획", "전망", "목표", "추진", "의도", "검토", "가능성", "예상", "추정",
        "시사", "논의", "협의", "제안", "희망", "될 수 있다", "할 수 있다", "보인다", "듯하다",
    ],
};

pub const INFERENTIAL: Lexicon = Lexicon {
    name: "inferential",
    entries: &[
        "때문", "따라", "해석하면", "의미한다", "만약", "이라면", "시사한다", "암시한다",
        "분석", "평가", "정황", "근거", "으로 보인다",
    ],
};

/// Official announcement / ruling vocabulary. Also counts as a certainty cue.
pub const FACTUAL_REPORT: Lexicon = Lexicon {
    name: "factual_report",
    entries: &[
        "밝혔다", "발표했다", "전했다", "판결했다", "확인했다", "공시했다", "발표문", "보도자료", "판결문",
    ],
};

// ============================================================================
// Tense cues
// ============================================================================

/// Concrete time references. "202"/"203" catch year prefixes; range particles are included.
pub const TEMPORAL: Lexicon = Lexicon {
    name: "temporal",
    entries: &[
        "내일", "모레", "이번 주", "다음 주", "내달", "다음 달", "내년", "후년", "203", "202", "9월", "10월",
        "하반기", "상반기", "1분기", "2분기", "3분기", "4분기", "연말", "월요일", "화요일", "수요일", "목요일",
        "금요일", "토요일", "일요일", "까지", "부터", "이후", "이내", "이상", "이하",
    ],
};

pub const PAST: Lexicon = Lexicon {
    name: "past",
    entries: &[
        "했다", "였다", "이었다", "발표했다", "판결했다", "발생했다", "재계약했다", "체결했다", "선정됐다",
        "지난", "앞서", "전날", "어제", "작년", "지난해",
    ],
};

pub const PRESENT: Lexicon = Lexicon {
    name: "present",
    entries: &["현재", "지금", "이다", "있다", "한다", "중이다", "중", "상태다"],
};

pub const FUTURE: Lexicon = Lexicon {
    name: "future",
    entries: &[
        "겠다", "할 것이다", "앞두고 있다", "앞둘 것이다", "될 것이다", "예정", "전망", "추진",
    ],
};

// ============================================================================
// Polarity cues
// ============================================================================

pub const NEGATIVE: Lexicon = Lexicon {
    name: "negative",
    entries: &[
        "감소", "적자", "손실", "하락", "위기", "경고", "논란", "비판", "징계", "실패", "파산",
        "취소", "불승인", "연기", "지연", "부족", "부정적", "악화", "역성장", "적색", "경보",
        "하한", "제재", "벌금", "구금", "문제", "위험",
    ],
};

/// Negating morphemes and endings. Single-syllable entries make this deliberately broad.
pub const NEGATIVE_MORPHEMES: Lexicon = Lexicon {
    name: "negative_morphemes",
    entries: &[
        "않", "못", "없", "무", "비", "불", "미", "지 못", "어렵다", "힘들다", "부족하다",
        "취소됐다", "파기됐다", "무산됐다", "철회했다",
    ],
};

pub const POSITIVE: Lexicon = Lexicon {
    name: "positive",
    entries: &[
        "증가", "호조", "개선", "성장", "확대", "수주", "달성", "수익", "이익", "승인", "합격", "수상",
        "반등", "상향", "회복", "개최", "체결", "확정", "상승",
    ],
};

/// Softening vocabulary that tempers an otherwise negative statement.
pub const MITIGATION: Lexicon = Lexicon {
    name: "mitigation",
    entries: &[
        "둔화", "완화", "회복", "반등", "상향", "상승 전환", "감소 폭 축소", "적자 축소", "손실 축소",
        "개선 조짐", "안정세", "진정세", "완화세", "회복세", "반등세", "상향 조정",
    ],
};

// ============================================================================
// Certainty cues
// ============================================================================

pub const UNCERTAIN: Lexicon = Lexicon {
    name: "uncertain",
    entries: &[
        "가능성", "추정", "검토", "논의", "전망", "예상", "관측", "제안", "가정", "미정", "잠정", "초안",
    ],
};

pub const CERTAIN: Lexicon = Lexicon {
    name: "certain",
    entries: &[
        "확정", "체결", "승인", "공시", "발표했다", "판결", "계약 체결", "발표문", "판결문",
    ],
};

/// All lexicons in a stable order, for listing and dumps.
pub const ALL: &[Lexicon] = &[
    CONVERSATIONAL,
    PREDICTIVE,
    INFERENTIAL,
    FACTUAL_REPORT,
    TEMPORAL,
    PAST,
    PRESENT,
    FUTURE,
    NEGATIVE,
    NEGATIVE_MORPHEMES,
    POSITIVE,
    MITIGATION,
    UNCERTAIN,
    CERTAIN,
];
