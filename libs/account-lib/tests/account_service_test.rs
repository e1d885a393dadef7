use account_lib::account_service::AccountService;
use account_lib::entities::{RoleRef, UserDraft};
use account_lib::errors_service::AccountServiceError;
use account_lib::repository::{RoleRepository, UserRepository, UserRoleRepository};
use account_lib::util::memory_pool;

async fn create_service() -> AccountService {
    let pool = memory_pool().await.expect("in-memory store");
    AccountService::new(
        UserRepository::new(pool.clone()),
        RoleRepository::new(pool.clone()),
        UserRoleRepository::new(pool),
    )
}

fn draft(login: &str, password: &str, name: &str, role_ids: &[i64]) -> UserDraft {
    UserDraft {
        login: Some(login.to_string()),
        password: Some(password.to_string()),
        name: Some(name.to_string()),
        roles: role_ids.iter().map(|id| RoleRef { id: *id }).collect(),
    }
}

#[tokio::test]
async fn integration_account_service_flow() {
    let service = create_service().await;

    // Build the role catalog
    let role1 = service.create_role("forTestPut").await.unwrap();
    let role2 = service.create_role("user").await.unwrap();
    let role3 = service.create_role("admin").await.unwrap();
    let role4 = service.create_role("analyst").await.unwrap();
    assert_eq!(
        (role1.id, role2.id, role3.id, role4.id),
        (1, 2, 3, 4),
        "ids follow creation order"
    );

    // Create users
    let john = service
        .create_user(draft("john", "sdH4k", "John Smith", &[2]))
        .await
        .unwrap();
    assert_eq!(john.roles.len(), 1);
    assert_eq!(john.roles[0].name, "user");

    let maria = service
        .create_user(draft("maria", "sdF5l", "Maria Smith", &[2, 3]))
        .await
        .unwrap();
    assert_eq!(maria.roles.len(), 2);

    // The list projection keeps creation order and skips role resolution
    let summaries = service.get_users().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].login, "john");
    assert_eq!(summaries[1].login, "maria");

    // Rename a role in place
    let renamed = service.update_role(1, "forTestPut+++").await.unwrap();
    assert_eq!(renamed.id, 1);
    assert_eq!(renamed.name, "forTestPut+++");

    // Update john: new password, new name, role set replaced wholesale
    let updated = service
        .update_user(draft("john", "sdH4k + test", "John Smith + test", &[3, 4]))
        .await
        .unwrap();
    assert_eq!(updated.password, "sdH4k + test");
    let ids: Vec<i64> = updated.roles.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4]);

    // Delete maria; the catalog stays intact
    service.delete_user("maria").await.unwrap();
    assert!(service.get_user("maria").await.unwrap().is_none());
    assert_eq!(service.get_roles().await.unwrap().len(), 4);
}

#[tokio::test]
async fn role_ids_are_never_reused() {
    let service = create_service().await;

    service.create_role("first").await.unwrap();
    let second = service.create_role("second").await.unwrap();
    service.delete_role(second.id).await.unwrap();

    let third = service.create_role("third").await.unwrap();
    assert_eq!(third.id, 3);

    let roles = service.get_roles().await.unwrap();
    let ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn duplicate_login_is_rejected() {
    let service = create_service().await;

    service
        .create_user(draft("john", "sdH4k", "John Smith", &[]))
        .await
        .unwrap();

    let result = service
        .create_user(draft("john", "sdF5l", "Other John", &[]))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        AccountServiceError::LoginAlreadyExists
    ));

    // The first registration is untouched
    let stored = service.get_user("john").await.unwrap().unwrap();
    assert_eq!(stored.name, "John Smith");
}

#[tokio::test]
async fn deleting_a_role_unassigns_it_everywhere() {
    let service = create_service().await;

    service.create_role("user").await.unwrap();
    service.create_role("admin").await.unwrap();
    service
        .create_user(draft("john", "sdH4k", "John Smith", &[1, 2]))
        .await
        .unwrap();
    service
        .create_user(draft("maria", "sdF5l", "Maria Smith", &[1]))
        .await
        .unwrap();

    service.delete_role(1).await.unwrap();

    let john = service.get_user("john").await.unwrap().unwrap();
    let john_ids: Vec<i64> = john.roles.iter().map(|r| r.id).collect();
    assert_eq!(john_ids, vec![2]);

    let maria = service.get_user("maria").await.unwrap().unwrap();
    assert!(maria.roles.is_empty());
}

#[tokio::test]
async fn unknown_role_reference_persists_nothing() {
    let service = create_service().await;

    service.create_role("user").await.unwrap();

    let result = service
        .create_user(draft("john", "sdH4k", "John Smith", &[1, 99]))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        AccountServiceError::UnknownRole(99)
    ));
    assert!(service.get_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn resolved_roles_come_back_in_ascending_id_order() {
    let service = create_service().await;

    service.create_role("user").await.unwrap();
    service.create_role("admin").await.unwrap();
    service.create_role("analyst").await.unwrap();

    // Reference them out of order
    service
        .create_user(draft("john", "sdH4k", "John Smith", &[3, 1, 2]))
        .await
        .unwrap();

    let john = service.get_user("john").await.unwrap().unwrap();
    let ids: Vec<i64> = john.roles.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
