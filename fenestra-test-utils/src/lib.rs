// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod animal;
pub mod helpers;
pub mod person;
pub mod test_channel;
pub mod test_data;

pub use self::animal::Animal;
pub use self::person::Person;
pub use self::test_channel::{test_channel, TestSender, TestStream};
pub use self::test_data::TestData;
