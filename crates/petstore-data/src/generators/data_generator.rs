//! 数据生成器
//!
//! 为宠物、订单、用户生成完整的请求负载。显式设置的字段原样保留
//! （包括 0、负数和空字符串），其余字段在 `build()` 时从取值池随机抽取。
//!
//! 随机源是带种子的 `StdRng`，相同种子产生相同的负载序列，
//! 失败的用例可以用日志里的种子重放。

use fake::Fake;
use fake::faker::internet::en::Password;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use petstore_shared::config::GeneratorConfig;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::pools::{
    CATEGORIES, ID_RANGE, ORDER_PET_ID_RANGE, ORDER_QUANTITY_RANGE, PET_NAMES, PHOTO_URL_BASE,
    STATUSES, TAG_COUNT_RANGE, TAGS,
};
use crate::models::{Category, DEFAULT_ORDER_STATUS, Order, Pet, Tag, User};

/// 带种子的负载生成器
///
/// 每个测试持有自己的生成器，不跨测试共享。
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: StdRng,
    seed: u64,
}

impl DataGenerator {
    /// 使用固定种子创建，输出可重现
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// 按配置创建
    ///
    /// 未配置种子时随机抽取一个，并写入日志以便重放。
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, configured = config.seed.is_some(), "数据生成器已初始化");
        Self::from_seed(seed)
    }

    /// 当前使用的种子
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pet(&mut self) -> PetBuilder<'_> {
        PetBuilder::new(&mut self.rng)
    }

    pub fn order(&mut self) -> OrderBuilder<'_> {
        OrderBuilder::new(&mut self.rng)
    }

    pub fn user(&mut self) -> UserBuilder<'_> {
        UserBuilder::new(&mut self.rng)
    }

    /// 仅指定 ID 的宠物，其余字段与完整生成一致
    pub fn minimal_pet(&mut self, id: Option<i64>) -> Pet {
        let builder = self.pet();
        match id {
            Some(id) => builder.id(id).build(),
            None => builder.build(),
        }
    }

    /// 批量生成用户，用于 createWithArray / createWithList
    pub fn users(&mut self, count: usize) -> Vec<User> {
        (0..count).map(|_| self.user().build()).collect()
    }
}

// ========== 宠物 ==========

/// 宠物负载构建器
#[must_use]
#[derive(Debug)]
pub struct PetBuilder<'a> {
    rng: &'a mut StdRng,
    id: Option<i64>,
    name: Option<String>,
    status: Option<String>,
    category: Option<Category>,
    tags: Option<Vec<Tag>>,
    photo_urls: Option<Vec<String>>,
}

impl<'a> PetBuilder<'a> {
    fn new(rng: &'a mut StdRng) -> Self {
        Self {
            rng,
            id: None,
            name: None,
            status: None,
            category: None,
            tags: None,
            photo_urls: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 允许任意字符串，便于构造非法状态
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn photo_urls(mut self, photo_urls: Vec<String>) -> Self {
        self.photo_urls = Some(photo_urls);
        self
    }

    pub fn build(self) -> Pet {
        let rng = self.rng;

        let id = self.id.unwrap_or_else(|| rng.random_range(ID_RANGE));
        let name = self
            .name
            .unwrap_or_else(|| PET_NAMES[rng.random_range(0..PET_NAMES.len())].to_string());
        let status = self
            .status
            .unwrap_or_else(|| STATUSES[rng.random_range(0..STATUSES.len())].to_string());
        let category = self.category.unwrap_or_else(|| {
            let (id, name) = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
            Category {
                id,
                name: name.to_string(),
            }
        });
        let tags = self.tags.unwrap_or_else(|| {
            let count = rng.random_range(TAG_COUNT_RANGE);
            TAGS.choose_multiple(rng, count)
                .map(|&(id, name)| Tag {
                    id,
                    name: name.to_string(),
                })
                .collect()
        });
        let photo_urls = self
            .photo_urls
            .unwrap_or_else(|| vec![format!("{PHOTO_URL_BASE}/{}.jpg", name.to_lowercase())]);

        Pet {
            id,
            name,
            status,
            category,
            tags,
            photo_urls,
        }
    }
}

// ========== 订单 ==========

/// 订单负载构建器
#[must_use]
#[derive(Debug)]
pub struct OrderBuilder<'a> {
    rng: &'a mut StdRng,
    id: Option<i64>,
    pet_id: Option<i64>,
    quantity: Option<i32>,
    status: Option<String>,
    complete: Option<bool>,
}

impl<'a> OrderBuilder<'a> {
    fn new(rng: &'a mut StdRng) -> Self {
        Self {
            rng,
            id: None,
            pet_id: None,
            quantity: None,
            status: None,
            complete: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn pet_id(mut self, pet_id: i64) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn build(self) -> Order {
        let rng = self.rng;

        Order {
            id: self.id.unwrap_or_else(|| rng.random_range(ID_RANGE)),
            pet_id: self
                .pet_id
                .unwrap_or_else(|| rng.random_range(ORDER_PET_ID_RANGE)),
            quantity: self
                .quantity
                .unwrap_or_else(|| rng.random_range(ORDER_QUANTITY_RANGE)),
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string()),
            complete: self.complete.unwrap_or(false),
        }
    }
}

// ========== 用户 ==========

/// 用户负载构建器
///
/// 未指定用户名时由姓名派生，未指定邮箱时由用户名派生。
#[must_use]
#[derive(Debug)]
pub struct UserBuilder<'a> {
    rng: &'a mut StdRng,
    id: Option<i64>,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    phone: Option<String>,
    user_status: Option<i32>,
}

impl<'a> UserBuilder<'a> {
    fn new(rng: &'a mut StdRng) -> Self {
        Self {
            rng,
            id: None,
            username: None,
            first_name: None,
            last_name: None,
            email: None,
            password: None,
            phone: None,
            user_status: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn user_status(mut self, user_status: i32) -> Self {
        self.user_status = Some(user_status);
        self
    }

    pub fn build(self) -> User {
        let rng = self.rng;

        let id = self.id.unwrap_or_else(|| rng.random_range(ID_RANGE));
        let first_name = self
            .first_name
            .unwrap_or_else(|| FirstName().fake_with_rng(rng));
        let last_name = self
            .last_name
            .unwrap_or_else(|| LastName().fake_with_rng(rng));
        let username = self.username.unwrap_or_else(|| {
            let suffix: u16 = rng.random_range(1000..=9999);
            format!(
                "{}{}{suffix}",
                username_part(&first_name),
                username_part(&last_name)
            )
        });
        let email = self
            .email
            .unwrap_or_else(|| format!("{username}@example.com"));
        let password = self
            .password
            .unwrap_or_else(|| Password(8..17).fake_with_rng(rng));
        let phone = self
            .phone
            .unwrap_or_else(|| PhoneNumber().fake_with_rng(rng));
        let user_status = self.user_status.unwrap_or_else(|| rng.random_range(0..=1));

        User {
            id,
            username,
            first_name,
            last_name,
            email,
            password,
            phone,
            user_status,
        }
    }
}

/// 姓名转用户名片段：小写，仅保留 ASCII 字母数字
fn username_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// 单元测试
// ============================================================================
