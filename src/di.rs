use crate::{
    abstract_trait::{
        DynCategoryRepository, DynCategoryService, DynReviewRepository, DynReviewService,
        DynUserRepository, DynUserService,
    },
    config::Database,
    repository::{
        CategoryRepository, InventoryLedger, OrderRepository, ProductRepository, ReviewRepository,
        UserRepository,
    },
    service::{
        CategoryService, OrderService, OrderServiceDeps, ProductService, ProductServiceDeps,
        ReviewService, ReviewServiceDeps, UserService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: DynUserService,
    pub category_service: DynCategoryService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub review_service: DynReviewService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"Arc<dyn UserServiceTrait>")
            .field("category_service", &"Arc<dyn CategoryServiceTrait>")
            .field("product_service", &self.product_service)
            .field("order_service", &self.order_service)
            .field("review_service", &"Arc<dyn ReviewServiceTrait>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: Database) -> Self {
        let ledger = InventoryLedger::new(db.inventory());

        let user_repository = Arc::new(UserRepository::new(db.clone())) as DynUserRepository;
        let category_repository =
            Arc::new(CategoryRepository::new(db.clone())) as DynCategoryRepository;
        let review_repository = Arc::new(ReviewRepository::new(db.clone())) as DynReviewRepository;
        let product_repository = ProductRepository::new(db.clone());
        let order_repository = OrderRepository::new(db);

        let user_service = Arc::new(UserService::new(user_repository.clone())) as DynUserService;
        let category_service =
            Arc::new(CategoryService::new(category_repository.clone())) as DynCategoryService;

        let product_service = ProductService::new(ProductServiceDeps {
            query: product_repository.query.clone(),
            command: product_repository.command.clone(),
            category: category_repository,
            order_query: order_repository.query.clone(),
            ledger: ledger.clone(),
        });

        let review_service = Arc::new(ReviewService::new(ReviewServiceDeps {
            repository: review_repository,
            user_query: user_repository.clone(),
            product_query: product_repository.query.clone(),
        })) as DynReviewService;

        let order_service = OrderService::new(OrderServiceDeps {
            query: order_repository.query,
            command: order_repository.command,
            product_query: product_repository.query,
            user_query: user_repository,
            ledger,
        });

        Self {
            user_service,
            category_service,
            product_service,
            order_service,
            review_service,
        }
    }
}
