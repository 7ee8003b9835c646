use sqlx::PgPool;
use storefront_core::roles::{ROLE_ADMIN, ROLE_CUSTOMER};
use storefront_db::repositories::RoleRepo;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    storefront_db::health_check(&pool).await.unwrap();

    for name in [ROLE_ADMIN, ROLE_CUSTOMER] {
        let role = RoleRepo::find_by_name(&pool, name)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("role {name} should be seeded"));
        assert_eq!(RoleRepo::resolve_name(&pool, role.id).await.unwrap(), name);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_resolves_to_placeholder(pool: PgPool) {
    assert_eq!(RoleRepo::resolve_name(&pool, 999).await.unwrap(), "unknown");
}
