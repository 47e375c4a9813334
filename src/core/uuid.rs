//
//  Copyright (C) 2025-2026  Mohamed Aly
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//

use crate::util::anyerror::AnyError;
use serde::de;
use serde::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use uuid25::Uuid25;

/// A project's unique identifier, written as a 25-digit base36 string.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(uuid::Uuid::nil())
    }

    pub fn get(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Encodes the identifier into its 25-digit form.
    pub fn encode(&self) -> String {
        Uuid25::from(self.0).to_string()
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Uuid {
    type Err = AnyError;

    /// Accepts the 25-digit form and any of the standard hex forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid25::parse(s) {
            Ok(id) => Ok(Self(uuid::Uuid::from(id))),
            Err(e) => Err(AnyError(format!("invalid uuid {:?}: {}", s, e))),
        }
    }
}

impl Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct LayerVisitor;

        impl<'de> de::Visitor<'de> for LayerVisitor {
            type Value = Uuid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a uuid string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Uuid::from_str(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(LayerVisitor)
    }
}

impl Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}
