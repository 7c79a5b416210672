use soroban_sdk::{contracterror, contracttype, Bytes, String, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    InvalidArgumentCount = 1,
    InvalidArgument = 2,
    KeyNotFound = 3,
    RiskNotFound = 4,
    MemberNotFound = 5,
    GroupNotFound = 6,
    InsurerNotFound = 7,
    ClaimNotFound = 8,
    RiskTypeMismatch = 9,
    InsufficientFunds = 10,
    ClaimExceedsRiskValue = 11,
    UndefinedTier = 12,
    PersistenceFailure = 13,
    CorruptRecord = 14,
    NotInitialized = 15,
    AlreadyInitialized = 16,
    RiskAlreadyCovered = 17,
    AmountOverflow = 18,
    UnknownOperation = 19,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RiskStatus {
    Uncovered = 1,
    Covered = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupStatus {
    Open = 1,
    Closed = 2,
}

/// Entity kinds that own an index and an id sequence.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKind {
    Risks = 1,
    Members = 2,
    Claims = 3,
    Insurers = 4,
    Groups = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub home_address: String,
    pub dob: String,
    pub risk_ids: Vec<String>,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Risk {
    pub id: String,
    pub value: i128,
    pub premium: Option<i128>, // set on enrollment
    pub model: String,
    pub risk_type: String,
    pub status: RiskStatus,
    pub owner_id: String,
    pub claim_ids: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub risk_ids: Vec<String>,
    pub risk_type: String,
    pub status: GroupStatus,
    pub pool_balance: i128,
    pub insurer_id: String,
    pub created_at: u64,
    pub end_at: u64,
    pub premium_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Insurer {
    pub id: String,
    pub name: String,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub id: String,
    pub risk_id: String,
    pub claimed: i128,
    pub settled: i128,
    pub timestamp: u64,
    pub claim_type: String,
}

/// Share of a premium per recipient, in basis points.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PremiumSplit {
    pub pool_bps: u32,
    pub insurer_bps: u32,
    pub admin_bps: u32,
}

/// Receipt of a successful enrollment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enrollment {
    pub risk_id: String,
    pub group_id: String,
    pub premium: i128,
    pub pool_amount: i128,
    pub insurer_amount: i128,
    pub admin_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupInfo {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub risk_type: String,
    pub status: GroupStatus,
    pub pool_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub id_width: u32,    // zero padding of generated ids
    pub max_tag_len: u32, // bytes allowed in any free-text argument
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            id_width: 3,
            max_tag_len: 64,
        }
    }
}

/// Location of a record in the ledger's key-value store. Raw reads and writes
/// only ever address `Entry` keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreKey {
    Entry(String),
    Config,
    AdminFee,
    Journal,
    Index(IndexKind),
    Sequence(IndexKind),
}

/// One staged write. `None` removes the key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JournalEntry {
    pub key: StoreKey,
    pub value: Option<Bytes>,
}
