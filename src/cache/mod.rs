//! 缓存层
//!
//! 通过 `ObjectCache` trait 抽象缓存后端，内置 Moka（内存）与 Redis 两种实现。
//! 后端在编译期通过 `declare_object_cache_plugin!` 宏注册到插件注册表，
//! 启动时按配置选择。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 后端异常（连接失败等），调用方应视为未命中处理
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 值以 JSON 字符串形式存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 注册缓存后端插件
///
/// 要求类型提供 `async fn create() -> crate::errors::Result<Box<dyn ObjectCache>>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(
                        || -> $crate::cache::register::BoxedObjectCacheFuture {
                            Box::pin(<$ty>::create())
                        },
                    ),
                );
            }
        }
    };
}
