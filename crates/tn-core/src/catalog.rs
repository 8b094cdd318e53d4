//! The scenario catalog: a read-only, ordered list of levels.
//!
//! The built-in catalog ships with the twenty Trap Net incidents. Custom
//! catalogs can be loaded from JSON (an array of [`Scenario`]s) and are
//! validated before use.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::scenario::{OptionChoice, Scenario};

/// Compact form of a built-in scenario.
struct Def {
    title: &'static str,
    alert: &'static str,
    options: [(char, &'static str); 3],
    correct: char,
    explanation: &'static str,
}

/// The built-in incidents, in level order.
const BUILTIN: &[Def] = &[
    Def {
        title: "Liquidity Drain Attempt",
        alert: "A wallet initiated a withdrawal of 95% of stablecoin liquidity from Protocol X in one tx.",
        options: [
            ('A', "Pause Function"),
            ('B', "Transaction Delay"),
            ('C', "Mint More Tokens"),
        ],
        correct: 'A',
        explanation: "Emergency pause prevents catastrophic liquidity drain before assets vanish.",
    },
    Def {
        title: "Suspicious Governance Vote",
        alert: "A new proposal transfers treasury funds to an unknown wallet and is set to pass in 1 hour.",
        options: [
            ('A', "Wallet Freeze"),
            ('B', "Voting Delay"),
            ('C', "Increase Gas Fees"),
        ],
        correct: 'B',
        explanation: "Delaying the vote gives time for Operators and community to review and stop a malicious governance takeover.",
    },
    Def {
        title: "Flash Loan Exploit Detected",
        alert: "Abnormal price movement from flash loans is manipulating Protocol Y\u{2019}s collateral system.",
        options: [
            ('A', "Oracle Freeze"),
            ('B', "Wallet Freeze"),
            ('C', "Block New Deposits"),
        ],
        correct: 'A',
        explanation: "Pausing oracle updates prevents exploiters from draining collateral with manipulated prices.",
    },
    Def {
        title: "Unauthorized Contract Upgrade",
        alert: "An unverified contract upgrade enabling unrestricted withdrawals was pushed to Protocol Z.",
        options: [
            ('A', "Contract Rollback"),
            ('B', "Pause Function"),
            ('C', "Reward All Users With NFTs"),
        ],
        correct: 'A',
        explanation: "Rolling back prevents malicious upgrades from taking effect.",
    },
    Def {
        title: "Suspicious Whale Movement",
        alert: "A newly created wallet received $10M and is rapidly bridging funds to multiple chains.",
        options: [
            ('A', "Wallet Freeze"),
            ('B', "Increase Gas Fees"),
            ('C', "Transaction Delay"),
        ],
        correct: 'C',
        explanation: "Delaying transfers gives Operators time to investigate before funds leave the network.",
    },
    Def {
        title: "Oracle Manipulation via Low Liquidity Pool",
        alert: "A tiny AMM pool is suddenly used to feed price data into Protocol A\u{2019}s lending market.",
        options: [
            ('A', "Oracle Freeze"),
            ('B', "Transaction Delay"),
            ('C', "Wallet Freeze"),
        ],
        correct: 'A',
        explanation: "Freezing the oracle prevents price manipulation via low-liquidity pools.",
    },
    Def {
        title: "Admin Key Compromise",
        alert: "The admin wallet of Protocol B is initiating transfers at odd hours, draining funds.",
        options: [
            ('A', "Contract Rollback"),
            ('B', "Wallet Freeze"),
            ('C', "Gas Increase"),
        ],
        correct: 'B',
        explanation: "Freezing the compromised admin wallet stops unauthorized drains.",
    },
    Def {
        title: "Malicious Token Airdrop",
        alert: "Thousands of wallets receive airdropped tokens with hidden malicious approvals.",
        options: [
            ('A', "Block Token Interactions"),
            ('B', "Oracle Freeze"),
            ('C', "Mint More Safe Tokens"),
        ],
        correct: 'A',
        explanation: "Blocking token interactions buys time before users unknowingly approve exploits.",
    },
    Def {
        title: "Bridge Exploit Detected",
        alert: "A bridge contract is issuing tokens without receiving locked assets on the other chain.",
        options: [
            ('A', "Pause Bridge Function"),
            ('B', "Increase Gas Fees"),
            ('C', "Reward Validators with NFTs"),
        ],
        correct: 'A',
        explanation: "Pausing the bridge prevents further unbacked minting.",
    },
    Def {
        title: "Reentrancy Exploit",
        alert: "Repeated withdrawal calls detected from a vulnerable staking contract.",
        options: [
            ('A', "Contract Rollback"),
            ('B', "Pause Function"),
            ('C', "Transaction Delay"),
        ],
        correct: 'B',
        explanation: "Pausing halts the reentrancy loop before funds are drained.",
    },
    Def {
        title: "Suspicious Governance Concentration",
        alert: "A single wallet accumulated 51% of voting tokens just before a proposal window.",
        options: [
            ('A', "Voting Delay"),
            ('B', "Wallet Freeze"),
            ('C', "Oracle Freeze"),
        ],
        correct: 'A',
        explanation: "Delaying governance execution gives time to investigate vote manipulation.",
    },
    Def {
        title: "Phishing Contract Deployment",
        alert: "A copycat contract was deployed with a nearly identical address to Protocol C.",
        options: [
            ('A', "Blacklist Contract"),
            ('B', "Oracle Freeze"),
            ('C', "Wallet Freeze"),
        ],
        correct: 'A',
        explanation: "Blacklisting prevents interactions with the malicious clone.",
    },
    Def {
        title: "Treasury Drain Proposal",
        alert: "A DAO proposal attempts to move 80% of treasury funds to a multisig with unknown signers.",
        options: [
            ('A', "Voting Delay"),
            ('B', "Contract Rollback"),
            ('C', "Mint Extra Treasury Tokens"),
        ],
        correct: 'A',
        explanation: "Delaying prevents execution until the proposal is reviewed.",
    },
    Def {
        title: "Suspicious NFT Contract Upgrade",
        alert: "NFT marketplace contract upgraded with functions allowing free minting.",
        options: [
            ('A', "Contract Rollback"),
            ('B', "Wallet Freeze"),
            ('C', "Pause Function"),
        ],
        correct: 'A',
        explanation: "Rolling back cancels the malicious upgrade.",
    },
    Def {
        title: "Multi-Chain Drain Attempt",
        alert: "Funds are being bridged out simultaneously across four chains.",
        options: [
            ('A', "Multi-Chain Transaction Delay"),
            ('B', "Oracle Freeze"),
            ('C', "Increase Gas Fees"),
        ],
        correct: 'A',
        explanation: "Delaying bridge transactions gives operators time to investigate.",
    },
    Def {
        title: "Suspicious Contract Creator",
        alert: "A new contract requests admin-like roles from users and is trending on socials with dApp links.",
        options: [
            ('A', "Blacklist Contract"),
            ('B', "Block Token Interactions"),
            ('C', "Voting Delay"),
        ],
        correct: 'B',
        explanation: "Blocking token interactions prevents mass approvals and mitigates rug pulls.",
    },
    Def {
        title: "Rapid Approval Spikes",
        alert: "Thousands of wallets approve a single contract within minutes.",
        options: [
            ('A', "Wallet Freeze"),
            ('B', "Block Token Interactions"),
            ('C', "Oracle Freeze"),
        ],
        correct: 'B',
        explanation: "Blocking interactions prevents immediate exploit via mass approvals.",
    },
    Def {
        title: "Validator Collusion Alert",
        alert: "Multiple validators report conflicting block states indicating possible collusion.",
        options: [
            ('A', "Pause Function"),
            ('B', "Increase Gas Fees"),
            ('C', "Voting Delay"),
        ],
        correct: 'A',
        explanation: "Pausing critical functions reduces risk while validator issues are resolved.",
    },
    Def {
        title: "Liquidity Pool Rugging Pattern",
        alert: "A token's liquidity pair shows sudden removal of paired assets right after price pumping.",
        options: [
            ('A', "Pause Function"),
            ('B', "Oracle Freeze"),
            ('C', "Wallet Freeze"),
        ],
        correct: 'A',
        explanation: "Pausing swaps or withdrawals prevents immediate rugging.",
    },
    Def {
        title: "Unknown Contract Approval Sweep",
        alert: "An unknown contract has approvals to spend tokens from many high-value wallets.",
        options: [
            ('A', "Wallet Freeze"),
            ('B', "Block Token Interactions"),
            ('C', "Transaction Delay"),
        ],
        correct: 'B',
        explanation: "Blocking interactions halts the approval sweep and prevents unauthorized transfers.",
    },
];

/// An ordered, immutable set of scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// The built-in twenty-level catalog.
    pub fn builtin() -> Self {
        let scenarios = BUILTIN
            .iter()
            .enumerate()
            .map(|(i, def)| Scenario {
                id: (i + 1).to_string(),
                title: def.title.to_string(),
                alert: def.alert.to_string(),
                options: def
                    .options
                    .iter()
                    .map(|(key, label)| OptionChoice::new(*key, *label))
                    .collect(),
                correct_key: def.correct,
                explanation: def.explanation.to_string(),
            })
            .collect();
        Self { scenarios }
    }

    /// Build a catalog from scenarios, validating them.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> CatalogResult<Self> {
        validate(&scenarios)?;
        Ok(Self { scenarios })
    }

    /// Parse and validate a JSON array of scenarios.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
        Self::from_scenarios(scenarios)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), levels = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Serialize as pretty-printed JSON, in the shape [`Catalog::from_json`] reads.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.scenarios)?)
    }

    /// Look up a scenario by id.
    pub fn by_id(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Look up a scenario by 1-indexed level number.
    pub fn level(&self, level: u32) -> Option<&Scenario> {
        let index = usize::try_from(level).ok()?.checked_sub(1)?;
        self.scenarios.get(index)
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog has no levels. Validated catalogs never are.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Number of the final level.
    pub fn last_level(&self) -> u32 {
        u32::try_from(self.scenarios.len()).unwrap_or(u32::MAX)
    }

    /// Iterate scenarios in level order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(scenarios: &[Scenario]) -> CatalogResult<()> {
    if scenarios.is_empty() {
        return Err(CatalogError::Empty);
    }

    for (i, scenario) in scenarios.iter().enumerate() {
        let position = u32::try_from(i + 1).unwrap_or(u32::MAX);
        if scenario.id != position.to_string() {
            return Err(CatalogError::NonDenseId {
                position,
                found: scenario.id.clone(),
            });
        }
        if scenario.options.is_empty() {
            return Err(CatalogError::NoOptions(scenario.id.clone()));
        }

        let mut seen = HashSet::new();
        for option in &scenario.options {
            if !option.key.is_ascii_uppercase() {
                return Err(CatalogError::InvalidOptionKey {
                    id: scenario.id.clone(),
                    key: option.key,
                });
            }
            if !seen.insert(option.key) {
                return Err(CatalogError::DuplicateOptionKey {
                    id: scenario.id.clone(),
                    key: option.key,
                });
            }
        }
        if !seen.contains(&scenario.correct_key) {
            return Err(CatalogError::MissingCorrectKey {
                id: scenario.id.clone(),
                key: scenario.correct_key,
            });
        }
    }

    Ok(())
}
