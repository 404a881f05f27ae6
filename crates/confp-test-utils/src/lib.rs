//! Testing utilities for the confp workspace
//!
//! Shared chain-configuration fixtures and assertions.

#![allow(missing_docs)]

use confp_capability::{Configurator, Interface};
use confp_schemas::{CoreGethChainConfig, Genesis, GoEthereumChainConfig, ParityChainSpec};
use confp_types::CapabilityValue;
use serde_json::{json, Value};

pub const STUREBY_NETWORK_ID: u64 = 314_158;
pub const CLASSIC_CHAIN_ID: u64 = 61;

pub fn goerli_geth_json() -> Value {
    json!({
        "chainId": 5,
        "homesteadBlock": 0,
        "eip150Block": 0,
        "eip155Block": 0,
        "eip158Block": 0,
        "byzantiumBlock": 0,
        "constantinopleBlock": 0,
        "petersburgBlock": 0,
        "istanbulBlock": 1_561_651,
        "clique": { "period": 15, "epoch": 30_000 }
    })
}

pub fn goerli_geth() -> GoEthereumChainConfig {
    serde_json::from_value(goerli_geth_json()).unwrap()
}

pub fn stureby_parity_json() -> Value {
    json!({
        "name": "stureby",
        "dataDir": "stureby",
        "engine": {
            "Ethash": {
                "params": {
                    "minimumDifficulty": "0x20000",
                    "difficultyBoundDivisor": "0x800",
                    "durationLimit": "0xd",
                    "blockReward": {
                        "0x0": "0x4563918244f40000",
                        "0x7530": "0x29a2241af62c0000",
                        "0x9c40": "0x1bc16d674ec80000"
                    },
                    "homesteadTransition": "0x2710",
                    "eip100bTransition": "0x7530",
                    "difficultyBombDelays": {
                        "0x7530": "0x2dc6c0",
                        "0x9c40": "0x1e8480"
                    }
                }
            }
        },
        "params": {
            "accountStartNonce": "0x0",
            "maximumExtraDataSize": "0x20",
            "minGasLimit": "0x1388",
            "gasLimitBoundDivisor": "0x400",
            "networkID": "0x4cb2e",
            "chainID": "0x4cb2e",
            "maxCodeSize": "0x6000",
            "maxCodeSizeTransition": "0x0",
            "eip150Transition": "0x3a98",
            "eip160Transition": "0x59d8",
            "eip161abcTransition": "0x59d8",
            "eip161dTransition": "0x59d8",
            "eip155Transition": "0x59d8",
            "eip140Transition": "0x7530",
            "eip211Transition": "0x7530",
            "eip214Transition": "0x7530",
            "eip658Transition": "0x7530",
            "eip145Transition": "0x9c40",
            "eip1014Transition": "0x9c40",
            "eip1052Transition": "0x9c40",
            "eip1283Transition": "0x9c40",
            "eip1283DisableTransition": "0x9c40",
            "eip1283ReenableTransition": "0xc350",
            "eip1706Transition": "0xc350",
            "eip1344Transition": "0xc350",
            "eip1884Transition": "0xc350",
            "eip2028Transition": "0xc350"
        },
        "genesis": {
            "seal": {
                "ethereum": {
                    "nonce": "0x0000000000000000",
                    "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000"
                }
            },
            "difficulty": "0x20000",
            "author": "0x0000000000000000000000000000000000000000",
            "timestamp": "0x59a4e76d",
            "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "extraData": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "gasLimit": "0x47b760"
        },
        "nodes": [
            "enode://dfa7aca3f5b635fbfe7d0b20575f25e40d9e27b4bfbb3cf74364a42023ad9f25c1a4383bcc8cced86ee511a7d03415345a4df05be37f1dff040e4c780699f1c0@168.61.153.255:31303"
        ],
        "accounts": {
            "0x0000000000000000000000000000000000000001": {
                "balance": "0x1",
                "builtin": {
                    "name": "ecrecover",
                    "pricing": { "linear": { "base": 3000, "word": 0 } }
                }
            },
            "0x0000000000000000000000000000000000000005": {
                "builtin": {
                    "name": "modexp",
                    "activate_at": "0x7530",
                    "pricing": { "modexp": { "divisor": 20 } }
                }
            },
            "0x0000000000000000000000000000000000000006": {
                "builtin": {
                    "name": "alt_bn128_add",
                    "activate_at": "0x7530",
                    "eip1108_transition": "0xc350",
                    "pricing": { "alt_bn128_const_operations": { "price": 500, "eip1108_transition_price": 150 } }
                }
            },
            "0x0000000000000000000000000000000000000007": {
                "builtin": {
                    "name": "alt_bn128_mul",
                    "activate_at": "0x7530",
                    "eip1108_transition": "0xc350",
                    "pricing": { "alt_bn128_const_operations": { "price": 40000, "eip1108_transition_price": 6000 } }
                }
            },
            "0x0000000000000000000000000000000000000008": {
                "builtin": {
                    "name": "alt_bn128_pairing",
                    "activate_at": "0x7530",
                    "eip1108_transition": "0xc350",
                    "pricing": { "alt_bn128_pairing": { "base": 100000, "pair": 80000 } }
                }
            },
            "0x0000000000000000000000000000000000000009": {
                "builtin": {
                    "name": "blake2_f",
                    "activate_at": "0xc350",
                    "pricing": { "blake2_f": { "gas_per_round": 1 } }
                }
            }
        }
    })
}

pub fn stureby_parity() -> ParityChainSpec {
    serde_json::from_value(stureby_parity_json()).unwrap()
}

pub fn stureby_geth_json() -> Value {
    json!({
        "chainId": 314_158,
        "networkId": 314_158,
        "homesteadBlock": 10_000,
        "eip150Block": 15_000,
        "eip150Hash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "eip155Block": 23_000,
        "eip158Block": 23_000,
        "byzantiumBlock": 30_000,
        "constantinopleBlock": 40_000,
        "petersburgBlock": 40_000,
        "istanbulBlock": 50_000,
        "ethash": {}
    })
}

pub fn stureby_geth() -> GoEthereumChainConfig {
    serde_json::from_value(stureby_geth_json()).unwrap()
}

pub fn classic_coregeth_json() -> Value {
    json!({
        "networkId": 1,
        "chainId": CLASSIC_CHAIN_ID,
        "eip2FBlock": 1_150_000,
        "eip7FBlock": 1_150_000,
        "eip150Block": 2_500_000,
        "eip155Block": 3_000_000,
        "eip160FBlock": 3_000_000,
        "eip161FBlock": 8_772_000,
        "eip170FBlock": 8_772_000,
        "eip100FBlock": 8_772_000,
        "eip140FBlock": 8_772_000,
        "eip198FBlock": 8_772_000,
        "eip211FBlock": 8_772_000,
        "eip212FBlock": 8_772_000,
        "eip213FBlock": 8_772_000,
        "eip214FBlock": 8_772_000,
        "eip658FBlock": 8_772_000,
        "eip145FBlock": 9_573_000,
        "eip1014FBlock": 9_573_000,
        "eip1052FBlock": 9_573_000,
        "eip152FBlock": 10_500_839,
        "eip1108FBlock": 10_500_839,
        "eip1344FBlock": 10_500_839,
        "eip1884FBlock": 10_500_839,
        "eip2028FBlock": 10_500_839,
        "eip2200FBlock": 10_500_839,
        "ecip1010PauseBlock": 3_000_000,
        "ecip1010Length": 2_000_000,
        "ecip1017FBlock": 5_000_000,
        "ecip1017EraRounds": 5_000_000,
        "disposalBlock": 5_900_000,
        "requireBlockHashes": {
            "1920000": "0x94365e3a8c0b35089c1d1195081fe7489b528a84b22199c916180db8b28ade7f"
        },
        "ethash": {}
    })
}

pub fn classic_coregeth() -> CoreGethChainConfig {
    serde_json::from_value(classic_coregeth_json()).unwrap()
}

pub fn classic_genesis() -> Genesis {
    serde_json::from_value(json!({
        "config": classic_coregeth_json(),
        "nonce": "0x0000000000000042",
        "timestamp": "0x0",
        "extraData": "0x11bbe8db4e347b4e8c937c1c8370e4b5ed33adb3db69cbdb7a38e1e50b1b82fa",
        "gasLimit": "0x1388",
        "difficulty": "0x400000000",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "coinbase": "0x0000000000000000000000000000000000000000",
        "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "alloc": {}
    }))
    .unwrap()
}

/// Capabilities of `interface` that `obj` holds a value for
pub fn present_in<C: Configurator + ?Sized>(interface: &Interface, obj: &C) -> Vec<&'static str> {
    interface
        .capabilities()
        .iter()
        .filter(|spec| obj.read(spec.name).is_present())
        .map(|spec| spec.name)
        .collect()
}

pub fn assert_reads<C: Configurator + ?Sized>(obj: &C, name: &str, expected: Option<u64>) {
    let got = obj.read(name);
    match expected {
        Some(n) => assert_eq!(got.as_u64(), Some(n), "{} on {}", name, obj.schema()),
        None => assert_eq!(got, CapabilityValue::Absent, "{} on {}", name, obj.schema()),
    }
}
